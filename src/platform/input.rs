//! Keyboard input shared by both shells

use crate::sim::TickInput;

/// How long the flap key stays held after its last press when the input
/// source never reports releases (ms). Auto-repeat presses arrive well
/// inside this window.
pub const REPEAT_WINDOW_MS: f64 = 150.0;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Flap,
    Quit,
}

/// Map a DOM `KeyboardEvent.key` value
pub fn web_action(key: &str) -> Option<Action> {
    match key {
        " " | "Spacebar" => Some(Action::Flap),
        _ => None,
    }
}

/// Turns key up/down events into a one-shot flap.
///
/// A press only counts when the key was up before it, so holding the key
/// (or OS auto-repeat) flaps once. With `auto_release` the key is treated
/// as released once no press has arrived for `REPEAT_WINDOW_MS`, for
/// terminals that only report presses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlapLatch {
    held: bool,
    pending: bool,
    auto_release: bool,
    last_press: f64,
}

impl FlapLatch {
    /// A latch for input without release events
    pub fn auto_release() -> Self {
        Self {
            auto_release: true,
            ..Self::default()
        }
    }

    pub fn press(&mut self, now: f64) {
        self.expire(now);
        self.last_press = now;
        if !self.held {
            self.held = true;
            self.pending = true;
        }
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Consume the pending edge
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Input for the tick at clock time `now` (ms)
    pub fn tick_input(&mut self, now: f64) -> TickInput {
        self.expire(now);
        TickInput { flap: self.take() }
    }

    fn expire(&mut self, now: f64) {
        if self.auto_release && self.held && now - self.last_press >= REPEAT_WINDOW_MS {
            self.held = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut latch = FlapLatch::default();
        latch.press(0.0);
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn test_repeat_without_release_is_ignored() {
        let mut latch = FlapLatch::default();
        latch.press(0.0);
        assert!(latch.tick_input(0.0).flap);
        latch.press(10.0);
        latch.press(20.0);
        assert!(!latch.tick_input(20.0).flap);
        assert!(latch.is_held());

        // Without auto release the key stays held however long it takes
        assert!(!latch.tick_input(10_000.0).flap);
        assert!(latch.is_held());

        latch.release();
        latch.press(10_001.0);
        assert!(latch.tick_input(10_001.0).flap);
    }

    #[test]
    fn test_tap_between_ticks_still_counts() {
        let mut latch = FlapLatch::default();
        latch.press(0.0);
        latch.release();
        assert!(!latch.is_held());
        assert!(latch.take());
    }

    #[test]
    fn test_auto_repeat_presses_flap_once() {
        let mut latch = FlapLatch::auto_release();
        let mut flaps = 0;
        // A held key on a press-only terminal: a press every other frame
        for frame in 0..60 {
            let now = frame as f64 * 16.5;
            if frame % 2 == 0 {
                latch.press(now);
            }
            if latch.tick_input(now).flap {
                flaps += 1;
            }
        }
        assert_eq!(flaps, 1);
        assert!(latch.is_held());
    }

    #[test]
    fn test_auto_release_after_quiet_window() {
        let mut latch = FlapLatch::auto_release();
        latch.press(0.0);
        assert!(latch.tick_input(0.0).flap);

        assert!(!latch.tick_input(REPEAT_WINDOW_MS - 1.0).flap);
        assert!(latch.is_held());
        assert!(!latch.tick_input(REPEAT_WINDOW_MS).flap);
        assert!(!latch.is_held());

        latch.press(REPEAT_WINDOW_MS + 50.0);
        assert!(latch.tick_input(REPEAT_WINDOW_MS + 50.0).flap);
    }

    #[test]
    fn test_separate_taps_past_window_both_flap() {
        let mut latch = FlapLatch::auto_release();
        latch.press(0.0);
        assert!(latch.take());
        // Next press comes in after the window with no tick in between
        latch.press(400.0);
        assert!(latch.take());
    }

    #[test]
    fn test_web_keys() {
        assert_eq!(web_action(" "), Some(Action::Flap));
        assert_eq!(web_action("Enter"), None);
        assert_eq!(web_action("a"), None);
    }
}
