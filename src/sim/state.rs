//! Game state and core simulation types
//!
//! Everything one match needs lives in `GameState`, owned by the frame loop.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::pipes::{Pipe, PipeRing};
use super::score::ScoreTracker;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, waiting for the first flap
    Start,
    /// Active gameplay
    #[default]
    Play,
    /// Hit a pipe: short freeze, then drop to the ground
    Fall,
    /// On the ground, overlays appear on a timer
    Over,
    /// Round finished, waiting for a flap to restart
    End,
}

/// End-of-round text layers. Each level shows itself and every level below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Overlay {
    #[default]
    None,
    GameOver,
    FinalScore,
    PlayAgain,
}

impl Overlay {
    /// Raise to `level`; never lowers
    pub fn raise(&mut self, level: Overlay) {
        if level > *self {
            *self = level;
        }
    }
}

/// The player sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Horizontal center, constant during a run
    pub x: f32,
    /// Vertical center (px, down is positive)
    pub y: f32,
    /// Vertical velocity (px/s)
    pub v: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            v: FLAP_VELOCITY,
        }
    }
}

impl Player {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Whether the player is low enough to flap
    pub fn below_ceiling(&self) -> bool {
        self.y > FLAP_CEILING
    }
}

/// Complete state of one match
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Visible end-of-round text
    pub overlay: Overlay,
    pub player: Player,
    pub pipes: PipeRing,
    pub score: ScoreTracker,
    /// When the player hit a pipe or the ground (ms)
    pub game_over_start: f64,
    /// Clock sample of the previous tick (ms)
    pub last_tick: f64,
}

impl GameState {
    /// Create a new match, already reset and playing
    pub fn new(seed: u64, now: f64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Play,
            overlay: Overlay::None,
            player: Player::default(),
            pipes: PipeRing::new(),
            score: ScoreTracker::default(),
            game_over_start: 0.0,
            last_tick: now,
        };
        state.reset(now);
        state
    }

    /// Re-initialize the match in place and start playing.
    ///
    /// The tick baseline moves to `now` so the first tick after an idle
    /// stretch does not see a huge elapsed time.
    pub fn reset(&mut self, now: f64) {
        self.score.reset();
        self.player = Player::default();
        self.pipes.reset();
        self.spawn_pipe();
        self.phase = GamePhase::Play;
        self.overlay = Overlay::None;
        self.game_over_start = 0.0;
        self.last_tick = now;
    }

    /// Put a new pipe just past the right edge with a random gap height.
    /// Returns the slot it went into.
    pub fn spawn_pipe(&mut self) -> usize {
        let range = PIPE_Y_MAX - PIPE_Y_MIN;
        let gap_y = PIPE_Y_MIN + self.rng.random::<f32>() * range;
        self.pipes.push(Pipe::entering(gap_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_playing() {
        let state = GameState::new(7, 1234.0);
        assert_eq!(state.phase, GamePhase::Play);
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(state.player, Player::default());
        assert_eq!(state.last_tick, 1234.0);
        assert_eq!(state.score.score, 0);
    }

    #[test]
    fn test_reset_spawns_one_pipe() {
        let state = GameState::new(42, 0.0);
        let spawned: Vec<_> = state.pipes.iter().filter(|p| p.x > PIPE_PARKED_X).collect();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].x, PIPE_ENTRY_X);
        assert!(spawned[0].gap_y >= PIPE_Y_MIN && spawned[0].gap_y < PIPE_Y_MAX);
        assert_eq!(state.pipes.current_slot(), 0);
        assert_eq!(state.pipes.next_slot(), 1);
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let mut a = GameState::new(99, 0.0);
        let mut b = GameState::new(99, 0.0);
        for _ in 0..8 {
            let sa = a.spawn_pipe();
            let sb = b.spawn_pipe();
            assert_eq!(a.pipes.get(sa).gap_y, b.pipes.get(sb).gap_y);
        }
    }

    #[test]
    fn test_overlay_only_rises() {
        let mut overlay = Overlay::None;
        overlay.raise(Overlay::FinalScore);
        overlay.raise(Overlay::GameOver);
        assert_eq!(overlay, Overlay::FinalScore);
        overlay.raise(Overlay::PlayAgain);
        assert_eq!(overlay, Overlay::PlayAgain);
    }

    #[test]
    fn test_flap_ceiling_is_exclusive() {
        let mut player = Player::default();
        player.y = FLAP_CEILING;
        assert!(!player.below_ceiling());
        player.y = FLAP_CEILING + 0.1;
        assert!(player.below_ceiling());
    }
}
