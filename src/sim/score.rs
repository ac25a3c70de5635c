//! Score tracking
//!
//! The player's x never changes, so a pipe is "passed" once it has scrolled
//! left to the player's x. Pipes are passed in spawn order, which is slot
//! order around the ring.

use super::pipes::PipeRing;
use crate::consts::PIPE_SLOTS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    /// Pipes passed this round
    pub score: u32,
    /// Slot of the next pipe to pass
    scoring_slot: usize,
}

impl ScoreTracker {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn scoring_slot(&self) -> usize {
        self.scoring_slot
    }

    /// Count the scoring pipe if it has reached `player_x`.
    /// At most one point per call. Returns whether the score went up.
    pub fn update(&mut self, player_x: f32, pipes: &PipeRing) -> bool {
        if player_x < pipes.get(self.scoring_slot).x {
            return false;
        }
        self.score += 1;
        self.scoring_slot = (self.scoring_slot + 1) % PIPE_SLOTS;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pipes::Pipe;

    #[test]
    fn test_scores_when_pipe_reaches_player() {
        let mut ring = PipeRing::new();
        ring.push(Pipe {
            x: PLAYER_START_X + 0.5,
            gap_y: 200.0,
        });
        let mut tracker = ScoreTracker::default();
        assert!(!tracker.update(PLAYER_START_X, &ring));

        ring.iter_mut().next().unwrap().x = PLAYER_START_X;
        assert!(tracker.update(PLAYER_START_X, &ring));
        assert_eq!(tracker.score, 1);
        assert_eq!(tracker.scoring_slot(), 1);
    }

    #[test]
    fn test_one_point_per_pipe() {
        let mut ring = PipeRing::new();
        ring.push(Pipe {
            x: PLAYER_START_X - 5.0,
            gap_y: 200.0,
        });
        ring.push(Pipe::entering(200.0));
        let mut tracker = ScoreTracker::default();
        assert!(tracker.update(PLAYER_START_X, &ring));
        // Slot 1 is still far to the right
        assert!(!tracker.update(PLAYER_START_X, &ring));
        assert_eq!(tracker.score, 1);
    }

    #[test]
    fn test_scoring_slot_cycles() {
        let mut ring = PipeRing::new();
        let mut tracker = ScoreTracker::default();
        let mut slots = Vec::new();
        for n in 1..=6 {
            ring.push(Pipe {
                x: PLAYER_START_X - 1.0,
                gap_y: 200.0,
            });
            slots.push(tracker.scoring_slot());
            assert!(tracker.update(PLAYER_START_X, &ring));
            assert_eq!(tracker.score, n);
            // Re-arm every slot behind the scoring one so only one pipe counts
            for pipe in ring.iter_mut() {
                pipe.x = PIPE_ENTRY_X;
            }
        }
        assert_eq!(slots, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_reset() {
        let mut tracker = ScoreTracker {
            score: 12,
            scoring_slot: 3,
        };
        tracker.reset();
        assert_eq!(tracker, ScoreTracker::default());
    }
}
