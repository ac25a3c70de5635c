//! Flappy - a minimal Flappy Bird clone
//!
//! Core modules:
//! - `sim`: Game engine (phases, physics, pipes, collisions, score)
//! - `renderer`: Draw list, bitmap font, WebGPU pipeline, software rasterizer
//! - `platform`: Input latch, errors, terminal frontend

pub mod platform;
pub mod renderer;
pub mod sim;

pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game configuration constants
///
/// Positions are in playfield pixels with y growing downward. Rates are per
/// second and converted to per-tick deltas with the elapsed milliseconds.
pub mod consts {
    /// Playfield dimensions
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;

    /// Converts per-second rates into per-millisecond deltas
    pub const MS_PER_SECOND: f32 = 1000.0;

    /// The player can only flap while below this line (also drawn as the horizon)
    pub const FLAP_CEILING: f32 = 70.0;
    /// Top of the ground strip; the player never sinks below it
    pub const GROUND_Y: f32 = 440.0;

    /// Player spawn point (x never changes during a run)
    pub const PLAYER_START_X: f32 = 160.0;
    pub const PLAYER_START_Y: f32 = 180.0;
    /// Player is a square of this side length
    pub const PLAYER_WIDTH: f32 = 40.0;

    /// Upward impulse on flap (px/s). With GRAVITY the player rises about one
    /// body height and is back at the flap height after half a second.
    pub const FLAP_VELOCITY: f32 = -320.0;
    /// Downward acceleration (px/s²)
    pub const GRAVITY: f32 = 1280.0;

    /// Leftward pipe scroll speed (px/s)
    pub const PIPE_VELOCITY: f32 = 100.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Drawn gap between the upper and lower pipe
    pub const PIPE_GAP: f32 = 120.0;
    /// Range of a new pipe's gap center
    pub const PIPE_Y_MIN: f32 = 140.0;
    pub const PIPE_Y_MAX: f32 = 370.0;

    /// Pipe pool capacity. Four slots keep recycled pipes off-screen.
    pub const PIPE_SLOTS: usize = 4;
    /// A new pipe spawns once the newest one has scrolled to this x
    pub const PIPE_SPAWN_X: f32 = WINDOW_WIDTH * 2.0 / 3.0;
    /// Where new pipes enter, just past the right edge
    pub const PIPE_ENTRY_X: f32 = WINDOW_WIDTH + PIPE_WIDTH;
    /// Parked (never spawned) slots sit this far off the left edge
    pub const PIPE_PARKED_X: f32 = -3.0 * PIPE_WIDTH;

    /// Collision leniency (px): the collision gap is this much narrower per
    /// side and taller per side than the drawn gap, and the player may sink
    /// this far into the ground before it counts
    pub const COLLISION_BUFFER: f32 = 10.0;

    /// Freeze after hitting a pipe, before the player drops (ms)
    pub const COLLISION_PAUSE_MS: f64 = 500.0;
    /// Game over until the final score is shown (ms)
    pub const FINAL_SCORE_DELAY_MS: f64 = 1000.0;
    /// Game over until a restart is accepted (ms)
    pub const GAME_OVER_TIME_MS: f64 = 2000.0;
}
