//! Game state and core simulation types
//!
//! Everything here is serializable so an in-progress round can be saved and
//! restored (Continue support in the browser shell).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::hack_position;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the current team to throw; pointer gestures are live
    Aiming,
    /// At least one stone was just thrown; physics runs every tick
    Sliding,
    /// All stones down and at rest; the resolver runs on the next tick
    Scoring,
    /// Round finished; only reset leaves this phase
    RoundOver,
}

/// The two sides. Red always throws first in a fresh round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// The opposing team
    pub fn other(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Red => "Red",
            Team::Blue => "Blue",
        }
    }
}

/// A thrown stone
///
/// All stones share `STONE_RADIUS`. A stone is never removed mid-round; once
/// it comes to rest it stays where it stopped until the next reset, even if
/// it slid off the visible sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stone {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub team: Team,
    /// False exactly when `vel` is (0, 0)
    pub in_motion: bool,
}

impl Stone {
    /// Distance from the stone center to an arbitrary point
    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }
}

/// Ordered set of live stones (throw order preserved)
///
/// Insertion order is the throw order; scoring only looks at final positions
/// but the stable order keeps replays and logs deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoneSet {
    stones: Vec<Stone>,
    next_id: u32,
}

impl StoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stone at the hack with the given launch velocity.
    ///
    /// Returns the new stone's id. A zero (or sub-threshold) launch velocity
    /// produces a stone that is already at rest.
    pub fn add_stone(&mut self, team: Team, vel: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let in_motion = vel.length() >= STONE_REST_SPEED;
        self.stones.push(Stone {
            id,
            pos: hack_position(),
            vel: if in_motion { vel } else { Vec2::ZERO },
            team,
            in_motion,
        });
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stone> {
        self.stones.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Stone> {
        self.stones.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// True when no stone is in motion (vacuously true for an empty set)
    pub fn all_at_rest(&self) -> bool {
        self.stones.iter().all(|s| !s.in_motion)
    }

    /// Stones thrown so far by one team
    pub fn thrown_by(&self, team: Team) -> u32 {
        self.stones.iter().filter(|s| s.team == team).count() as u32
    }

    /// Drop every stone. Only called on full game reset.
    pub fn clear(&mut self) {
        self.stones.clear();
        self.next_id = 0;
    }
}

/// An in-progress press-drag aim gesture
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AimGesture {
    /// Pointer-down location
    pub start: Vec2,
    /// Latest pointer location
    pub current: Vec2,
}

/// The target area: tee position plus concentric ring radii.
///
/// Static for the life of the process; carried on `GameState` so tests can
/// place it wherever convenient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct House {
    pub center: Vec2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub button_radius: f32,
}

impl Default for House {
    fn default() -> Self {
        Self {
            center: Vec2::new(HOUSE_CENTER_X, HOUSE_CENTER_Y),
            outer_radius: HOUSE_OUTER_RADIUS,
            inner_radius: HOUSE_INNER_RADIUS,
            button_radius: BUTTON_RADIUS,
        }
    }
}

/// Cumulative per-team points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub red: u32,
    pub blue: u32,
}

impl Scores {
    pub fn for_team(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }
}

/// Complete game state for one round (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub stones: StoneSet,
    pub current_team: Team,
    /// Throws completed this round, in [0, TOTAL_STONES]
    pub stones_thrown: u32,
    pub scores: Scores,
    /// Active aim gesture, only ever `Some` while `phase == Aiming`
    pub gesture: Option<AimGesture>,
    pub house: House,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Aiming,
            stones: StoneSet::new(),
            current_team: Team::Red,
            stones_thrown: 0,
            scores: Scores::default(),
            gesture: None,
            house: House::default(),
        }
    }

    /// Full game reset. Always accepted, from any phase, and idempotent:
    /// stones and scores are dropped, Red is back on the hack.
    pub fn reset(&mut self) {
        log::info!("Game reset");
        self.phase = GamePhase::Aiming;
        self.stones.clear();
        self.current_team = Team::Red;
        self.stones_thrown = 0;
        self.scores = Scores::default();
        self.gesture = None;
    }

    /// Throws the current team still has this round
    pub fn stones_remaining(&self, team: Team) -> u32 {
        STONES_PER_TEAM.saturating_sub(self.stones.thrown_by(team))
    }

    /// Pure per-frame snapshot for the render frontend. All text formatting
    /// happens on the frontend side; the core only reports values.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            phase: self.phase,
            current_team: self.current_team,
            stones_thrown: self.stones_thrown,
            red_remaining: self.stones_remaining(Team::Red),
            blue_remaining: self.stones_remaining(Team::Blue),
            scores: self.scores,
            aim: self.gesture.map(|g| AimReadout {
                start: g.start,
                current: g.current,
                power_percent: super::gesture::power_percent(g.start, g.current),
            }),
        }
    }
}

/// Aim line endpoints and display power for the frontend
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AimReadout {
    pub start: Vec2,
    pub current: Vec2,
    /// Drag length as a percentage of a full-power drag, capped at 100
    pub power_percent: f32,
}

/// Everything the frontend needs to draw the HUD for one frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub phase: GamePhase,
    pub current_team: Team,
    pub stones_thrown: u32,
    pub red_remaining: u32,
    pub blue_remaining: u32,
    pub scores: Scores,
    pub aim: Option<AimReadout>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_stone_preserves_throw_order() {
        let mut set = StoneSet::new();
        let a = set.add_stone(Team::Red, Vec2::new(5.0, 0.0));
        let b = set.add_stone(Team::Blue, Vec2::new(3.0, 1.0));
        let c = set.add_stone(Team::Red, Vec2::ZERO);

        let ids: Vec<u32> = set.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.thrown_by(Team::Red), 2);
        assert_eq!(set.thrown_by(Team::Blue), 1);
    }

    #[test]
    fn test_sub_threshold_launch_is_at_rest() {
        let mut set = StoneSet::new();
        set.add_stone(Team::Red, Vec2::new(0.01, 0.01));
        let stone = set.iter().next().unwrap();
        assert!(!stone.in_motion);
        assert_eq!(stone.vel, Vec2::ZERO);
    }

    #[test]
    fn test_all_at_rest() {
        let mut set = StoneSet::new();
        assert!(set.all_at_rest());

        set.add_stone(Team::Red, Vec2::new(4.0, 0.0));
        assert!(!set.all_at_rest());

        for stone in set.iter_mut() {
            stone.vel = Vec2::ZERO;
            stone.in_motion = false;
        }
        assert!(set.all_at_rest());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = GameState::new();
        state.scores.red = 1;
        state.stones.add_stone(Team::Red, Vec2::new(4.0, 0.0));
        state.stones_thrown = 1;
        state.current_team = Team::Blue;
        state.phase = GamePhase::RoundOver;

        state.reset();
        let once = format!("{:?}", state);
        state.reset();
        let twice = format!("{:?}", state);

        assert_eq!(once, twice);
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.current_team, Team::Red);
        assert!(state.stones.is_empty());
        assert_eq!(state.scores, Scores::default());
    }
}
