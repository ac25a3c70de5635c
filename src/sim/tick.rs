//! Variable timestep simulation tick
//!
//! Dispatches on the current phase, runs that phase's systems and reports
//! what happened as a list of `GameEvent`s.

use super::collision::{find_pipe_hit, hits_ground};
use super::physics::{flap, integrate, scroll};
use super::state::{GamePhase, GameState, Overlay};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap key went down since the previous tick (rising edge only)
    pub flap: bool,
}

/// Something that can move the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Flap,
    HitPipe,
    HitGround,
    GameOverElapsed,
}

/// Side effects of a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    PipeSpawned { slot: usize },
    Scored { score: u32 },
    HitPipe { slot: usize },
    HitGround,
    FinalScoreShown,
    RoundEnded { score: u32 },
    Restarted,
}

/// The phase transition table. `None` means the trigger is ignored.
pub fn transition(phase: GamePhase, trigger: Trigger) -> Option<GamePhase> {
    use GamePhase::*;
    match (phase, trigger) {
        (Start | End, Trigger::Flap) => Some(Play),
        (Play, Trigger::HitPipe) => Some(Fall),
        (Play | Fall, Trigger::HitGround) => Some(Over),
        (Over, Trigger::GameOverElapsed) => Some(End),
        _ => None,
    }
}

/// Advance the game to clock time `now` (ms)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> Vec<GameEvent> {
    let dt = (now - state.last_tick).max(0.0) as f32;
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Start | GamePhase::End => {
            if input.flap {
                fire(state, Trigger::Flap, now, &mut events);
            }
        }
        GamePhase::Play => tick_play(state, input, dt, now, &mut events),
        GamePhase::Fall => tick_fall(state, dt, now, &mut events),
        GamePhase::Over => tick_over(state, now, &mut events),
    }

    state.last_tick = now;
    events
}

fn tick_play(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    now: f64,
    events: &mut Vec<GameEvent>,
) {
    if input.flap && flap(&mut state.player) {
        events.push(GameEvent::Flapped);
    }

    if state.pipes.spawn_due() {
        let slot = state.spawn_pipe();
        events.push(GameEvent::PipeSpawned { slot });
    }

    integrate(&mut state.player, dt);
    scroll(&mut state.pipes, dt);

    if state.score.update(state.player.x, &state.pipes) {
        events.push(GameEvent::Scored {
            score: state.score.score,
        });
    }

    if hits_ground(&state.player) {
        fire(state, Trigger::HitGround, now, events);
    } else if let Some(slot) = find_pipe_hit(&state.player, &state.pipes) {
        events.push(GameEvent::HitPipe { slot });
        fire(state, Trigger::HitPipe, now, events);
    }
}

fn tick_fall(state: &mut GameState, dt: f32, now: f64, events: &mut Vec<GameEvent>) {
    if now < state.game_over_start + COLLISION_PAUSE_MS {
        return;
    }

    integrate(&mut state.player, dt);

    if hits_ground(&state.player) {
        fire(state, Trigger::HitGround, now, events);
    }
}

fn tick_over(state: &mut GameState, now: f64, events: &mut Vec<GameEvent>) {
    if now >= state.game_over_start + FINAL_SCORE_DELAY_MS && state.overlay < Overlay::FinalScore {
        state.overlay.raise(Overlay::FinalScore);
        events.push(GameEvent::FinalScoreShown);
    }

    if now >= state.game_over_start + GAME_OVER_TIME_MS {
        fire(state, Trigger::GameOverElapsed, now, events);
    }
}

/// Apply `trigger` through the transition table, with the side effects of
/// entering the new phase
fn fire(state: &mut GameState, trigger: Trigger, now: f64, events: &mut Vec<GameEvent>) {
    let Some(next) = transition(state.phase, trigger) else {
        return;
    };

    match next {
        GamePhase::Play => {
            state.reset(now);
            events.push(GameEvent::Restarted);
        }
        GamePhase::Fall => {
            // Bounce off the pipe before dropping
            state.game_over_start = now;
            state.player.v = FLAP_VELOCITY;
        }
        GamePhase::Over => {
            state.game_over_start = now;
            state.overlay.raise(Overlay::GameOver);
            events.push(GameEvent::HitGround);
        }
        GamePhase::End => {
            state.overlay.raise(Overlay::PlayAgain);
            events.push(GameEvent::RoundEnded {
                score: state.score.score,
            });
        }
        GamePhase::Start => {}
    }

    state.phase = next;
}
