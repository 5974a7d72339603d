//! Stone motion integration
//!
//! One fixed-step integrator tick per rendered frame: scale velocity by the
//! friction coefficient, add it to position, snap to rest below the speed
//! threshold. Geometric decay with `FRICTION < 1` guarantees every stone
//! reaches rest after finitely many ticks.
//!
//! There is deliberately no collision handling here - stones pass through
//! each other and may slide off the sheet without being removed.

use crate::consts::{FRICTION, STONE_REST_SPEED};

use super::state::{Stone, StoneSet};

/// Advance a single stone by one tick. No-op for a resting stone.
pub fn step_stone(stone: &mut Stone) {
    if !stone.in_motion {
        return;
    }

    stone.vel *= FRICTION;
    stone.pos += stone.vel;

    if stone.vel.length() < STONE_REST_SPEED {
        stone.vel = glam::Vec2::ZERO;
        stone.in_motion = false;
    }
}

/// Advance every in-motion stone by one tick.
///
/// Returns true when the whole set is at rest afterwards.
pub fn step_stones(stones: &mut StoneSet) -> bool {
    for stone in stones.iter_mut() {
        step_stone(stone);
    }
    stones.all_at_rest()
}
