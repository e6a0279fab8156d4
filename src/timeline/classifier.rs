//! Gap outlier classification
//!
//! Computes robust statistics over the raw inter-beat gaps and labels each
//! gap against the upper cutoff. Only gaps above the upper cutoff are
//! actionable (they mark pauses to be filled); the lower cutoff is computed
//! and reported for diagnostics but takes no part in classification.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Outlier label for one inter-beat gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapLabel {
    /// Gap within the expected spacing
    Normal,

    /// Gap longer than the upper cutoff, marking a pause to be filled
    LongOutlier,
}

/// Robust gap statistics and classification cutoffs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapStatistics {
    /// Median inter-beat gap in seconds
    pub median: f32,

    /// Population standard deviation of the gaps in seconds
    pub std_dev: f32,

    /// Lower cutoff: `median - short_outlier_cutoff * std_dev`
    ///
    /// Reported for diagnostics only; gaps below it are still labeled
    /// `Normal`.
    pub lower: f32,

    /// Upper cutoff: `median + long_outlier_cutoff * std_dev`
    pub upper: f32,
}

/// Classify each inter-beat gap against the long-gap cutoff
///
/// Computes the gap median and population standard deviation, derives the
/// lower and upper cutoffs from the two scale factors, and labels each gap
/// `LongOutlier` when it exceeds the upper cutoff.
///
/// # Arguments
///
/// * `gaps` - Raw inter-beat gaps in seconds
/// * `short_outlier_cutoff` - Standard-deviation multiple for the lower cutoff
/// * `long_outlier_cutoff` - Standard-deviation multiple for the upper cutoff
///
/// # Returns
///
/// Gap statistics and one label per gap
///
/// # Errors
///
/// Returns `TimelineError::InsufficientBeats` for an empty gap sequence and
/// `TimelineError::InvalidInput` for a negative scale factor.
pub fn classify_gaps(
    gaps: &[f32],
    short_outlier_cutoff: f32,
    long_outlier_cutoff: f32,
) -> Result<(GapStatistics, Vec<GapLabel>), TimelineError> {
    if gaps.is_empty() {
        return Err(TimelineError::InsufficientBeats(
            "empty gap sequence".to_string(),
        ));
    }

    if short_outlier_cutoff < 0.0 || long_outlier_cutoff < 0.0 {
        return Err(TimelineError::InvalidInput(format!(
            "Outlier cutoffs must be non-negative, got {} and {}",
            short_outlier_cutoff, long_outlier_cutoff
        )));
    }

    let median = median(gaps);
    let std_dev = population_std(gaps);
    let lower = median - short_outlier_cutoff * std_dev;
    let upper = median + long_outlier_cutoff * std_dev;

    log::debug!(
        "Gap statistics over {} gaps: median={:.4}, std={:.4}, lower={:.4}, upper={:.4}",
        gaps.len(),
        median,
        std_dev,
        lower,
        upper
    );

    let labels = gaps
        .iter()
        .map(|&gap| {
            if gap > upper {
                GapLabel::LongOutlier
            } else {
                GapLabel::Normal
            }
        })
        .collect();

    Ok((
        GapStatistics {
            median,
            std_dev,
            lower,
            upper,
        },
        labels,
    ))
}

/// Median of a non-empty slice
fn median(values: &[f32]) -> f32 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if sorted.len() % 2 == 0 {
        (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) * 0.5
    } else {
        sorted[sorted.len() / 2]
    }
}

/// Population standard deviation of a non-empty slice
fn population_std(values: &[f32]) -> f32 {
    let mean: f32 = values.iter().sum::<f32>() / values.len() as f32;
    let variance: f32 = values
        .iter()
        .map(|&v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f32>()
        / values.len() as f32;
    variance.sqrt()
}
