//! Error types for the beat timeline engine

use std::fmt;

/// Errors that can occur during timeline reconstruction
#[derive(Debug, Clone)]
pub enum TimelineError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Fewer than two raw beats were detected, so gap statistics are undefined
    InsufficientBeats(String),

    /// Too few raw beats for a trimmed-mean tempo estimate
    InsufficientTempoSample(String),

    /// Pause interpolation produced a zero or non-finite average gap
    DegeneratePauseFill(String),

    /// I/O error while reading activations or writing output
    Io(String),
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TimelineError::InsufficientBeats(msg) => write!(f, "Insufficient beats: {}", msg),
            TimelineError::InsufficientTempoSample(msg) => {
                write!(f, "Insufficient beats for tempo estimation: {}", msg)
            }
            TimelineError::DegeneratePauseFill(msg) => {
                write!(f, "Degenerate pause fill: {}", msg)
            }
            TimelineError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for TimelineError {}
