//! Likelihood activation dump loading
//!
//! Reads a beat likelihood curve from a text dump: decimal values separated
//! by whitespace or newlines, one value per frame at the estimator's fixed
//! frame rate.

use std::path::Path;

use crate::error::TimelineError;

/// Load a likelihood sequence from a text dump
///
/// # Arguments
///
/// * `path` - Path to the activation dump
///
/// # Returns
///
/// Likelihood values in frame order
///
/// # Errors
///
/// Returns `TimelineError::Io` when the file cannot be read and
/// `TimelineError::InvalidInput` for a token that does not parse as a
/// number.
pub fn read_activations(path: &Path) -> Result<Vec<f32>, TimelineError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TimelineError::Io(format!("failed to read {}: {}", path.display(), e)))?;

    parse_activations(&contents)
}

/// Parse a likelihood sequence from dump text
///
/// # Errors
///
/// Returns `TimelineError::InvalidInput` for a token that does not parse
/// as a number.
pub fn parse_activations(contents: &str) -> Result<Vec<f32>, TimelineError> {
    let mut values = Vec::new();

    for token in contents.split_whitespace() {
        let value: f32 = token.parse().map_err(|_| {
            TimelineError::InvalidInput(format!("invalid activation value: {:?}", token))
        })?;
        values.push(value);
    }

    Ok(values)
}
