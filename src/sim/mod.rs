//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in from the caller as a millisecond clock sample
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod pipes;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Aabb, find_pipe_hit, hits_ground, hits_pipe, player_box};
pub use pipes::{Pipe, PipeRing};
pub use score::ScoreTracker;
pub use state::{GamePhase, GameState, Overlay, Player};
pub use tick::{GameEvent, TickInput, Trigger, tick, transition};
