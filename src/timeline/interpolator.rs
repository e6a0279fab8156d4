//! Pause interpolation over the labeled gap sequence
//!
//! Rewrites the beat timeline so that each long pause (one or more
//! consecutive outlier gaps) becomes several evenly spaced synthetic beats
//! at the surrounding spacing. Without this step a breakdown or silence in
//! the audio would reach the downstream time-stretcher as one absurdly long
//! segment instead of several well-paced ones.
//!
//! # Algorithm
//!
//! A single forward scan over the labeled gaps with an explicit pause flag:
//!
//! 1. A normal gap extends the timeline by its own duration and ends any
//!    active pause.
//! 2. The first outlier gap of a run opens a pause: look ahead through the
//!    consecutive outlier run to the next normal gap, sum the run into
//!    `time_to_fill`, estimate the local spacing as the mean of the normal
//!    gaps on either side of the pause, and emit `round(time_to_fill /
//!    spacing)` beats spaced `time_to_fill / count` apart.
//! 3. Outlier gaps inside an already-open pause were absorbed by step 2 and
//!    are skipped.
//!
//! The fill is linear; the spacing does not ramp between the two
//! surrounding tempos.
//! TODO: scale the fill spacing linearly between the surrounding gaps.

use crate::error::TimelineError;
use crate::timeline::classifier::GapLabel;

/// Pause-filling scan state
#[derive(Debug, Clone)]
struct FillState {
    /// True while inside an outlier run that has already been filled
    in_pause: bool,

    /// Corrected beat times emitted so far
    timeline: Vec<f32>,
}

impl FillState {
    fn new() -> Self {
        Self {
            in_pause: false,
            timeline: Vec::new(),
        }
    }

    /// Append a beat `gap` seconds after the last emitted beat (after time
    /// 0 when the timeline is empty)
    fn push_after_last(&mut self, gap: f32) {
        let last = self.timeline.last().copied().unwrap_or(0.0);
        self.timeline.push(last + gap);
    }
}

/// Rewrite the labeled gap sequence into a corrected beat timeline
///
/// Normal gaps pass through unchanged; each run of consecutive long-outlier
/// gaps is replaced by evenly spaced synthetic beats at the spacing of the
/// surrounding normal gaps. The result is a monotonically increasing beat
/// timeline whose first element is the first gap's duration.
///
/// # Arguments
///
/// * `gaps` - Raw inter-beat gaps in seconds, one per raw beat
/// * `labels` - Outlier label for each gap
///
/// # Returns
///
/// Corrected beat times in seconds
///
/// # Errors
///
/// Returns `TimelineError::InvalidInput` when `gaps` and `labels` differ in
/// length, and `TimelineError::DegeneratePauseFill` when the spacing
/// estimate for a pause is zero or non-finite.
pub fn fill_pauses(gaps: &[f32], labels: &[GapLabel]) -> Result<Vec<f32>, TimelineError> {
    if gaps.len() != labels.len() {
        return Err(TimelineError::InvalidInput(format!(
            "{} gaps but {} labels",
            gaps.len(),
            labels.len()
        )));
    }

    let mut state = FillState::new();

    for (i, &gap) in gaps.iter().enumerate() {
        match labels[i] {
            GapLabel::Normal => {
                state.in_pause = false;
                state.push_after_last(gap);
            }
            GapLabel::LongOutlier => {
                // Absorbed by the fill that opened this pause
                if state.in_pause {
                    continue;
                }
                state.in_pause = true;

                // Bootstrap: a pause before any emitted beat keeps its raw
                // duration as the first beat time
                if state.timeline.is_empty() {
                    state.timeline.push(gap);
                    continue;
                }

                // The gap before the pause is always normal here: a
                // preceding outlier would still hold in_pause
                let previous_normal_gap = gaps[i - 1];

                // Look ahead through the consecutive outlier run for the
                // next normal gap
                let mut trailing_outlier_sum = 0.0f32;
                let mut next_good_gap = None;
                for j in (i + 1)..gaps.len() {
                    match labels[j] {
                        GapLabel::LongOutlier => trailing_outlier_sum += gaps[j],
                        GapLabel::Normal => {
                            next_good_gap = Some(gaps[j]);
                            break;
                        }
                    }
                }

                let time_to_fill = gap + trailing_outlier_sum;

                // A pause running to the end of the sequence has no closing
                // normal gap; fall back to the spacing before the pause
                let next_good_gap = next_good_gap.unwrap_or(previous_normal_gap);

                let avg_gap = (previous_normal_gap + next_good_gap) / 2.0;
                if !avg_gap.is_finite() || avg_gap <= 0.0 {
                    return Err(TimelineError::DegeneratePauseFill(format!(
                        "spacing estimate {} spanning pause at gap index {}",
                        avg_gap, i
                    )));
                }

                let beats_in_pause = (time_to_fill / avg_gap).round().max(1.0) as usize;
                let synthetic_gap = time_to_fill / beats_in_pause as f32;

                log::debug!(
                    "Filling {:.3}s pause at gap index {} with {} beats spaced {:.3}s",
                    time_to_fill,
                    i,
                    beats_in_pause,
                    synthetic_gap
                );

                for _ in 0..beats_in_pause {
                    state.push_after_last(synthetic_gap);
                }
            }
        }
    }

    Ok(state.timeline)
}
