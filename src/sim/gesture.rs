//! Pointer gesture handling and throw translation
//!
//! A throw is a single press-drag-release gesture in sheet coordinates.
//! Dragging away from the house and releasing throws toward it: the launch
//! velocity is `(start - end) * POWER_SCALE`, a slingshot pull. The launch
//! speed is unclamped; only the percentage shown to the player is capped.

use glam::Vec2;

use crate::consts::{FULL_POWER_DRAG, POWER_SCALE};

use super::state::{AimGesture, GamePhase, GameState};

/// Translate a completed gesture into a launch velocity
#[inline]
pub fn throw_velocity(start: Vec2, end: Vec2) -> Vec2 {
    (start - end) * POWER_SCALE
}

/// Drag length as a display percentage, capped at 100
pub fn power_percent(start: Vec2, current: Vec2) -> f32 {
    (start.distance(current) / FULL_POWER_DRAG * 100.0).min(100.0)
}

impl GameState {
    /// Pointer pressed: begin an aim gesture.
    ///
    /// Ignored outside the `Aiming` phase; a second press while a gesture is
    /// already live just restarts it (matches pointer-capture behavior in
    /// the browser, where this cannot normally happen).
    pub fn pointer_down(&mut self, point: Vec2) {
        if self.phase != GamePhase::Aiming {
            log::debug!("pointer_down ignored in {:?}", self.phase);
            return;
        }
        self.gesture = Some(AimGesture {
            start: point,
            current: point,
        });
    }

    /// Pointer dragged: update the live gesture. Inert without one, so a
    /// stray move after release never mutates state.
    pub fn pointer_move(&mut self, point: Vec2) {
        if self.phase != GamePhase::Aiming {
            return;
        }
        if let Some(gesture) = &mut self.gesture {
            gesture.current = point;
        }
    }

    /// Pointer released: consume the gesture and throw a stone.
    ///
    /// Exactly one stone is created per completed gesture. A release with no
    /// live gesture (or outside `Aiming`) is ignored.
    pub fn pointer_up(&mut self, point: Vec2) {
        if self.phase != GamePhase::Aiming {
            log::debug!("pointer_up ignored in {:?}", self.phase);
            return;
        }
        let Some(gesture) = self.gesture.take() else {
            return;
        };

        let vel = throw_velocity(gesture.start, point);
        let id = self.stones.add_stone(self.current_team, vel);
        self.stones_thrown += 1;
        self.phase = GamePhase::Sliding;
        log::info!(
            "{} throws stone {} ({} of {}) vel=({:.2}, {:.2})",
            self.current_team.as_str(),
            id,
            self.stones_thrown,
            crate::consts::TOTAL_STONES,
            vel.x,
            vel.y,
        );
    }
}
