//! Pipe pool: a fixed ring of obstacle slots
//!
//! Pipes are spaced by time. A new one enters when the most recent one has
//! scrolled two thirds of the way across, overwriting the oldest slot.

use crate::consts::*;

/// One pipe pair with a vertical gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Horizontal center (px)
    pub x: f32,
    /// Vertical center of the gap (px)
    pub gap_y: f32,
}

impl Pipe {
    /// A slot that has never been spawned
    pub const fn parked() -> Self {
        Self {
            x: PIPE_PARKED_X,
            gap_y: 0.0,
        }
    }

    /// A fresh pipe just past the right edge
    pub const fn entering(gap_y: f32) -> Self {
        Self {
            x: PIPE_ENTRY_X,
            gap_y,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - PIPE_WIDTH / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH / 2.0
    }

    /// Bottom edge of the upper pipe
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_y - PIPE_GAP / 2.0
    }

    /// Top edge of the lower pipe
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + PIPE_GAP / 2.0
    }
}

/// Bounded ring of `PIPE_SLOTS` pipes
#[derive(Debug, Clone)]
pub struct PipeRing {
    slots: [Pipe; PIPE_SLOTS],
    /// Most recently populated slot
    current: usize,
    /// Slot the next push overwrites (holds the oldest pipe)
    next: usize,
}

impl Default for PipeRing {
    fn default() -> Self {
        Self::new()
    }
}

impl PipeRing {
    pub fn new() -> Self {
        Self {
            slots: [Pipe::parked(); PIPE_SLOTS],
            current: 0,
            next: 0,
        }
    }

    /// Park every slot and zero both cursors
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Store `pipe` over the oldest slot and make it current.
    /// Returns the slot index used.
    pub fn push(&mut self, pipe: Pipe) -> usize {
        let slot = self.next;
        self.slots[slot] = pipe;
        self.current = slot;
        self.next = (slot + 1) % PIPE_SLOTS;
        slot
    }

    /// The most recently pushed pipe
    pub fn current(&self) -> &Pipe {
        &self.slots[self.current]
    }

    pub fn current_slot(&self) -> usize {
        self.current
    }

    /// The pipe the next push will replace
    pub fn oldest(&self) -> &Pipe {
        &self.slots[self.next]
    }

    pub fn next_slot(&self) -> usize {
        self.next
    }

    /// Pipe at `slot` (wraps modulo capacity)
    pub fn get(&self, slot: usize) -> &Pipe {
        &self.slots[slot % PIPE_SLOTS]
    }

    /// Whether the newest pipe has scrolled far enough for another to enter
    pub fn spawn_due(&self) -> bool {
        self.current().x <= PIPE_SPAWN_X
    }

    pub fn capacity(&self) -> usize {
        PIPE_SLOTS
    }

    /// All slots in index order, parked ones included
    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pipe> {
        self.slots.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ring_is_parked() {
        let ring = PipeRing::new();
        assert_eq!(ring.capacity(), 4);
        assert!(ring.iter().all(|p| p.x == PIPE_PARKED_X));
        assert_eq!(ring.current_slot(), 0);
        assert_eq!(ring.next_slot(), 0);
        assert!(ring.spawn_due());
    }

    #[test]
    fn test_push_wraps_around() {
        let mut ring = PipeRing::new();
        let slots: Vec<usize> = (0..6).map(|i| ring.push(Pipe::entering(i as f32))).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 0, 1]);
        assert_eq!(ring.current_slot(), 1);
        assert_eq!(ring.current().gap_y, 5.0);
        // Slot 2 still holds the third push, the oldest survivor
        assert_eq!(ring.oldest().gap_y, 2.0);
    }

    #[test]
    fn test_spawn_due_threshold_inclusive() {
        let mut ring = PipeRing::new();
        let slot = ring.push(Pipe::entering(200.0));
        assert!(!ring.spawn_due());

        ring.iter_mut().nth(slot).unwrap().x = PIPE_SPAWN_X + 0.01;
        assert!(!ring.spawn_due());
        ring.iter_mut().nth(slot).unwrap().x = PIPE_SPAWN_X;
        assert!(ring.spawn_due());
    }

    #[test]
    fn test_reset_parks_everything() {
        let mut ring = PipeRing::new();
        ring.push(Pipe::entering(150.0));
        ring.push(Pipe::entering(250.0));
        ring.reset();
        assert!(ring.iter().all(|p| *p == Pipe::parked()));
        assert_eq!(ring.current_slot(), 0);
        assert_eq!(ring.next_slot(), 0);
    }

    #[test]
    fn test_gap_edges() {
        let pipe = Pipe::entering(200.0);
        assert_eq!(pipe.gap_top(), 140.0);
        assert_eq!(pipe.gap_bottom(), 260.0);
        assert_eq!(pipe.right() - pipe.left(), PIPE_WIDTH);
    }
}
