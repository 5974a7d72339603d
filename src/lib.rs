//! Hurry Hard - a two-player curling game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stone physics, turn sequencing, scoring)
//!
//! Rendering (canvas 2D) and platform glue live in the binary; the sim has no
//! display dependencies and runs headless for tests and the native driver.

pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Sheet (playing surface / canvas) dimensions in pixels
    pub const SHEET_WIDTH: f32 = 800.0;
    pub const SHEET_HEIGHT: f32 = 400.0;

    /// House center (the tee), 120 px in from the right edge
    pub const HOUSE_CENTER_X: f32 = SHEET_WIDTH - 120.0;
    pub const HOUSE_CENTER_Y: f32 = SHEET_HEIGHT / 2.0;

    /// Concentric house rings, outermost first
    pub const HOUSE_OUTER_RADIUS: f32 = 80.0;
    pub const HOUSE_INNER_RADIUS: f32 = 40.0;
    pub const BUTTON_RADIUS: f32 = 20.0;

    /// Stone geometry and launch point (the hack)
    pub const STONE_RADIUS: f32 = 15.0;
    pub const HACK_X: f32 = 150.0;
    pub const HACK_Y: f32 = SHEET_HEIGHT / 2.0;

    /// Per-tick velocity multiplier. Applied once per tick regardless of
    /// frame duration - game feel is tuned against this fixed-step model,
    /// so it is not dt-scaled.
    pub const FRICTION: f32 = 0.98;
    /// Speed below which a stone snaps to rest
    pub const STONE_REST_SPEED: f32 = 0.1;

    /// Drag displacement to launch velocity scale
    pub const POWER_SCALE: f32 = 0.15;
    /// Drag length (px) shown as 100% power. Display only - the launch
    /// velocity itself is unclamped.
    pub const FULL_POWER_DRAG: f32 = 150.0;

    /// Throws per team per round
    pub const STONES_PER_TEAM: u32 = 4;
    /// Total throws in a round
    pub const TOTAL_STONES: u32 = STONES_PER_TEAM * 2;

    /// Hog lines, visual only: measured back from the tee and forward from
    /// the hack respectively
    pub const HOG_LINE_TO_TEE: f32 = 220.0;
    pub const FAR_HOG_X: f32 = HOUSE_CENTER_X - HOG_LINE_TO_TEE;
    pub const NEAR_HOG_X: f32 = HACK_X - STONE_RADIUS * 2.0 + HOG_LINE_TO_TEE;
}

/// Launch point for every thrown stone
#[inline]
pub fn hack_position() -> Vec2 {
    Vec2::new(consts::HACK_X, consts::HACK_Y)
}
