//! Round-end scoring resolution
//!
//! Shot rock takes the round: among stones touching or inside the house,
//! the single closest to the tee scores one point for its team. Only ever
//! one point per round, however many of that team's stones sit closer than
//! the opponent's best - that is this game's rule, not an approximation to
//! tighten up later.

use crate::consts::STONE_RADIUS;

use super::state::{House, Scores, StoneSet, Team};

/// Points awarded by one scoring resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    /// Scoring team, or `None` when the house is empty
    pub winner: Option<Team>,
}

impl ScoreDelta {
    pub fn none() -> Self {
        Self { winner: None }
    }

    pub fn point(team: Team) -> Self {
        Self { winner: Some(team) }
    }

    /// Fold this delta into the cumulative scores
    pub fn apply(self, scores: &mut Scores) {
        match self.winner {
            Some(Team::Red) => scores.red += 1,
            Some(Team::Blue) => scores.blue += 1,
            None => {}
        }
    }
}

/// Find the shot rock and award its team one point.
///
/// A stone qualifies when its center is strictly closer to the tee than
/// `outer_radius + STONE_RADIUS`, i.e. it at least touches the outside of
/// the house. Distance ties go to the earliest thrown stone (`min_by` keeps
/// the first minimum), which is stable across runs.
pub fn resolve(stones: &StoneSet, house: &House) -> ScoreDelta {
    let qualifying = house.outer_radius + STONE_RADIUS;

    let shot_rock = stones
        .iter()
        .map(|s| (s, s.distance_to(house.center)))
        .filter(|(_, d)| *d < qualifying)
        .min_by(|(_, a), (_, b)| a.total_cmp(b));

    match shot_rock {
        Some((stone, dist)) => {
            log::info!(
                "{} scores: stone {} at {:.1} px from the tee",
                stone.team.as_str(),
                stone.id,
                dist,
            );
            ScoreDelta::point(stone.team)
        }
        None => {
            log::info!("No stones in the house, blank round");
            ScoreDelta::none()
        }
    }
}
