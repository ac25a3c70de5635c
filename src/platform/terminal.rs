//! Terminal frontend
//!
//! Draws the game with half-block characters: every terminal cell shows two
//! vertically stacked pixels, the top one as the foreground of `▀` and the
//! bottom one as the background.

use std::io::{self, Write, stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{self, Color as CColor},
    terminal,
};

use super::input::{Action, FlapLatch};
use super::{PlatformError, log_events};
use crate::renderer::{Label, PixelBuf, Rgb, build_scene, rasterize};
use crate::sim::{GameState, tick};

const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Raw mode and the alternate screen for as long as this lives
pub struct TerminalSession {
    /// Whether key release events are reported
    pub key_releases: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self, PlatformError> {
        terminal::enable_raw_mode().map_err(PlatformError::TerminalInit)?;
        // From here on, Drop undoes whatever did get set up
        let mut session = Self {
            key_releases: false,
        };

        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )
        .map_err(PlatformError::TerminalInit)?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .map_err(PlatformError::TerminalInit)?;
            session.key_releases = true;
        } else {
            log::info!("Terminal does not report key releases, inferring them from press gaps");
        }

        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.key_releases {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            style::ResetColor,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Map a key to an action
pub fn key_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char(' ') => Some(Action::Flap),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Pixel buffer size for a terminal of `size` cells
fn pixel_size(size: io::Result<(u16, u16)>) -> Result<(usize, usize), PlatformError> {
    let (cols, rows) = size.map_err(PlatformError::TerminalInit)?;
    Ok((cols as usize, rows as usize * 2))
}

fn rgb(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Write one frame: the pixels, then the labels on top
pub fn draw(out: &mut impl Write, buf: &PixelBuf, labels: &[Label]) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;
    let rows = buf.height() / 2;
    let mut prev_fg = None;
    let mut prev_bg = None;

    for row in 0..rows {
        for col in 0..buf.width() {
            let top = buf.get(col, row * 2);
            let bot = buf.get(col, row * 2 + 1);

            if prev_bg != Some(bot) {
                queue!(out, style::SetBackgroundColor(rgb(bot)))?;
                prev_bg = Some(bot);
            }
            if top == bot {
                queue!(out, style::Print(' '))?;
            } else {
                if prev_fg != Some(top) {
                    queue!(out, style::SetForegroundColor(rgb(top)))?;
                    prev_fg = Some(top);
                }
                queue!(out, style::Print('\u{2580}'))?;
            }
        }
        if row + 1 < rows {
            queue!(out, style::ResetColor, style::Print("\r\n"))?;
            prev_fg = None;
            prev_bg = None;
        }
    }

    for label in labels {
        let (col, row) = (label.col as usize, label.row as usize);
        if row >= rows || col >= buf.width() {
            continue;
        }
        let text: String = label.text.chars().take(buf.width() - col).collect();
        // Keep the background of the cells the label covers
        queue!(
            out,
            cursor::MoveTo(label.col, label.row),
            style::SetBackgroundColor(rgb(buf.get(col, row * 2 + 1))),
            style::SetForegroundColor(rgb(label.color)),
            style::Print(text),
        )?;
    }

    queue!(out, style::ResetColor)?;
    out.flush()
}

/// Run the game until the player quits
pub fn run() -> Result<(), PlatformError> {
    let session = TerminalSession::enter()?;
    let mut out = stdout();

    let (pw, ph) = pixel_size(terminal::size())?;
    let mut buf = PixelBuf::new(pw, ph);

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;

    let seed: u64 = rand::random();
    let mut state = GameState::new(seed, now_ms());
    let mut latch = if session.key_releases {
        FlapLatch::default()
    } else {
        FlapLatch::auto_release()
    };
    log::info!("Game initialized with seed: {}", seed);

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match (key_action(&key), key.kind) {
                    (Some(Action::Quit), KeyEventKind::Press) => {
                        log::info!("Quit");
                        return Ok(());
                    }
                    (Some(Action::Flap), KeyEventKind::Press) => latch.press(now_ms()),
                    (Some(Action::Flap), KeyEventKind::Release) => latch.release(),
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    buf.resize(cols as usize, rows as usize * 2);
                }
                _ => {}
            }
        }

        let now = now_ms();
        let events = tick(&mut state, &latch.tick_input(now), now);
        log_events(&events);

        let labels = rasterize(&build_scene(&state), &mut buf);
        draw(&mut out, &buf, &labels)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_BUDGET {
            thread::sleep(FRAME_BUDGET - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(
            key_action(&key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::Flap)
        );
        assert_eq!(
            key_action(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            key_action(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            key_action(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(key_action(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(key_action(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_pixel_size() {
        assert_eq!(pixel_size(Ok((80, 24))).unwrap(), (80, 48));
        let err = pixel_size(Err(io::Error::other("no tty"))).unwrap_err();
        assert!(matches!(err, PlatformError::TerminalInit(_)));
    }

    #[test]
    fn test_draw_uses_half_blocks() {
        let mut buf = PixelBuf::new(2, 2);
        buf.set(0, 0, Rgb(255, 0, 0));
        let mut out = Vec::new();
        draw(&mut out, &buf, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Split colors in column 0, a plain space in column 1
        assert_eq!(text.matches('\u{2580}').count(), 1);
        assert!(text.contains(' '));
    }

    #[test]
    fn test_draw_clips_labels() {
        let buf = PixelBuf::new(4, 2);
        let labels = [Label {
            col: 1,
            row: 0,
            text: "Game Over!".to_string(),
            color: Rgb(255, 255, 255),
        }];
        let mut out = Vec::new();
        draw(&mut out, &buf, &labels).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Gam"));
        assert!(!text.contains("Game"));
    }
}
