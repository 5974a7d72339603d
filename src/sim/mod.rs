//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (throw order)
//! - No rendering or platform dependencies
//!
//! The render frontend drives `tick()` once per frame and feeds pointer
//! events straight into `GameState`; everything else is internal.

pub mod gesture;
pub mod motion;
pub mod scoring;
pub mod state;
pub mod tick;

pub use gesture::{power_percent, throw_velocity};
pub use scoring::{ScoreDelta, resolve};
pub use state::{
    AimGesture, AimReadout, GamePhase, GameState, House, Scores, StatusSnapshot, Stone, StoneSet,
    Team,
};
pub use tick::tick;
