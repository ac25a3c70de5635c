//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key edges into a flap latch)
//! - Startup failures
//! - The terminal frontend (native only; the web frontend lives in main.rs)

pub mod input;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

use std::io;

use thiserror::Error;

use crate::sim::GameEvent;

pub use input::{Action, FlapLatch, REPEAT_WINDOW_MS, web_action};

/// Failures setting up or driving a frontend
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Raw mode, alternate screen, size query or keyboard flags failed
    #[error("failed to set up the terminal: {0}")]
    TerminalInit(#[source] io::Error),
    /// Reading input or writing a frame failed mid-run
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The page lacks an element the web frontend needs
    #[error("page is missing {0}")]
    MissingPage(&'static str),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Log what a tick did
pub fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Flapped => log::debug!("Flap"),
            GameEvent::PipeSpawned { slot } => log::debug!("Pipe spawned in slot {}", slot),
            GameEvent::Scored { score } => log::debug!("Score: {}", score),
            GameEvent::HitPipe { slot } => log::info!("Hit pipe in slot {}, falling", slot),
            GameEvent::HitGround => log::info!("Hit the ground, game over"),
            GameEvent::FinalScoreShown => log::debug!("Final score shown"),
            GameEvent::RoundEnded { score } => log::info!("Round ended with score {}", score),
            GameEvent::Restarted => log::info!("New round"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert() {
        let err: PlatformError = io::Error::other("broken pipe").into();
        assert!(matches!(err, PlatformError::Io(_)));
        assert_eq!(err.to_string(), "terminal I/O failed: broken pipe");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_init_error_message() {
        let err = PlatformError::TerminalInit(io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "failed to set up the terminal: not a tty");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_page_message() {
        let err = PlatformError::MissingPage("<canvas id=\"canvas\">");
        assert_eq!(err.to_string(), "page is missing <canvas id=\"canvas\">");
        assert!(std::error::Error::source(&err).is_none());
    }
}
