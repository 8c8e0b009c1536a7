//! Crate-level error types.
//!
//! Only the surfaces around the animation core can fail: preset files and
//! the background worker thread. Ticking an animation never errors.

use std::fmt;

/// Errors produced by the glyph-motion crate.
#[derive(Debug)]
pub enum GlyphMotionError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Failed to spawn the animation worker thread.
    ThreadSpawn(std::io::Error),
    /// The animation worker thread is no longer running.
    WorkerDisconnected,
}

impl fmt::Display for GlyphMotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::WorkerDisconnected => {
                write!(f, "animation worker is not running")
            }
        }
    }
}

impl std::error::Error for GlyphMotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlyphMotionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
