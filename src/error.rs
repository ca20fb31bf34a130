//! Error types
//!
//! Startup failures (missing font, broken terminal, degenerate geometry) are
//! surfaced through [`PongError`] instead of letting the game run with an
//! unusable resource.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error enum
#[derive(Debug)]
pub enum PongError {
    /// The font asset could not be read from disk.
    FontLoad { path: PathBuf, source: io::Error },

    /// The font asset was read but is not a usable font face.
    FontParse { path: PathBuf, reason: String },

    /// A rectangle that is divided by (field, paddle) has no area.
    DegenerateRect {
        /// What the rectangle describes, for the message.
        what: &'static str,
        width: f32,
        height: f32,
    },

    /// Terminal setup or output failed.
    Terminal(io::Error),
}

impl fmt::Display for PongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PongError::FontLoad { path, source } => {
                write!(f, "failed to load font '{}': {}", path.display(), source)
            }
            PongError::FontParse { path, reason } => {
                write!(f, "'{}' is not a usable font: {}", path.display(), reason)
            }
            PongError::DegenerateRect {
                what,
                width,
                height,
            } => write!(
                f,
                "{} must have a positive size, got {} x {}",
                what, width, height
            ),
            PongError::Terminal(e) => write!(f, "terminal error: {}", e),
        }
    }
}

impl std::error::Error for PongError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PongError::FontLoad { source, .. } => Some(source),
            PongError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PongError {
    fn from(e: io::Error) -> Self {
        PongError::Terminal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_rect_message() {
        let err = PongError::DegenerateRect {
            what: "field",
            width: 0.0,
            height: 10.0,
        };
        assert_eq!(err.to_string(), "field must have a positive size, got 0 x 10");
    }

    #[test]
    fn test_io_error_maps_to_terminal() {
        let err: PongError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, PongError::Terminal(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
