//! Trimmed-mean tempo estimation
//!
//! Estimates a single bpm figure from the raw (uncorrected) beat times by
//! averaging the interquartile subset of consecutive beat intervals.
//! Discarding the lowest and highest quartile keeps isolated detection
//! glitches and pauses from skewing the estimate.

use crate::error::TimelineError;

/// Estimate tempo from raw beat times
///
/// Computes consecutive differences of the beat times, sorts them, keeps
/// the middle 50%, and converts the mean of that subset to beats per
/// minute.
///
/// # Arguments
///
/// * `beat_times` - Raw detected beat times in seconds, in order
///
/// # Returns
///
/// Tempo estimate in beats per minute
///
/// # Errors
///
/// Returns `TimelineError::InsufficientTempoSample` when the interquartile
/// subset is empty (too few raw beats).
pub fn estimate_tempo(beat_times: &[f32]) -> Result<f32, TimelineError> {
    let mut diffs: Vec<f32> = beat_times.windows(2).map(|w| w[1] - w[0]).collect();
    diffs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let quarter = diffs.len() / 4;
    let mid_diffs = &diffs[quarter..3 * quarter];

    if mid_diffs.is_empty() {
        return Err(TimelineError::InsufficientTempoSample(format!(
            "{} raw beats leave no interquartile intervals",
            beat_times.len()
        )));
    }

    let average: f32 = mid_diffs.iter().sum::<f32>() / mid_diffs.len() as f32;
    let bpm = 60.0 / average;

    log::debug!(
        "Tempo estimate: {:.2} bpm from {} of {} intervals",
        bpm,
        mid_diffs.len(),
        diffs.len()
    );

    Ok(bpm)
}
