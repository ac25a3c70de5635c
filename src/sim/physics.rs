//! Variable timestep integration
//!
//! `dt` is elapsed milliseconds; rates are per second, so every delta is
//! `rate / 1000 * dt`.

use super::pipes::PipeRing;
use super::state::Player;
use crate::consts::*;

/// Advance the player's vertical position and velocity by `dt` ms.
/// Position uses the velocity from before this step. Never sinks below the ground.
pub fn integrate(player: &mut Player, dt: f32) {
    player.y += player.v / MS_PER_SECOND * dt;
    player.v += GRAVITY / MS_PER_SECOND * dt;
    player.y = player.y.min(GROUND_Y);
}

/// Apply the flap impulse if the player is below the ceiling.
/// Edge triggering is the caller's job. Returns whether it fired.
pub fn flap(player: &mut Player) -> bool {
    if !player.below_ceiling() {
        return false;
    }
    player.v = FLAP_VELOCITY;
    true
}

/// Scroll every slot left by `dt` ms, parked slots included
pub fn scroll(pipes: &mut PipeRing, dt: f32) {
    let dx = PIPE_VELOCITY / MS_PER_SECOND * dt;
    for pipe in pipes.iter_mut() {
        pipe.x -= dx;
    }
}
