//! Beat extraction from a likelihood curve
//!
//! Converts the per-frame beat likelihood sequence into beat onset times
//! using a rising-edge threshold crossing. A latch suppresses repeated
//! detections while the curve stays above the threshold, so one continuous
//! excursion produces exactly one beat.

use crate::error::TimelineError;

/// Raw beat extraction output
#[derive(Debug, Clone)]
pub struct RawBeats {
    /// Beat onset times in seconds
    pub times: Vec<f32>,

    /// Inter-beat gaps in seconds; `gaps[0]` is measured from time 0
    pub gaps: Vec<f32>,
}

/// Rising-edge detector state
#[derive(Debug, Clone)]
struct EdgeLatch {
    /// True while the curve sits above the threshold
    on_beat: bool,

    /// Time of the most recently recorded beat, in seconds
    last_beat: f32,
}

impl EdgeLatch {
    fn new() -> Self {
        Self {
            on_beat: false,
            last_beat: 0.0,
        }
    }
}

/// Extract beat onset times from a likelihood sequence
///
/// Scans the sequence in order. A beat is recorded at sample `i` when the
/// likelihood rises above `beat_threshold` from below; the beat time is
/// `i / sample_rate`. The gap recorded alongside each beat is the time
/// since the previous beat (since time 0 for the first beat).
///
/// # Arguments
///
/// * `samples` - Likelihood values, one per frame
/// * `sample_rate` - Frame rate of the likelihood sequence in Hz
/// * `beat_threshold` - Likelihood cutoff, must be in (0, 1)
///
/// # Returns
///
/// Beat times and their gaps, one gap per beat
///
/// # Errors
///
/// Returns `TimelineError::InvalidInput` for an out-of-range threshold or a
/// zero sample rate, and `TimelineError::InsufficientBeats` when fewer than
/// two beats cross the threshold (gap statistics are undefined downstream).
pub fn extract_beats(
    samples: &[f32],
    sample_rate: u32,
    beat_threshold: f32,
) -> Result<RawBeats, TimelineError> {
    if sample_rate == 0 {
        return Err(TimelineError::InvalidInput(
            "Sample rate must be non-zero".to_string(),
        ));
    }

    if !(beat_threshold > 0.0 && beat_threshold < 1.0) {
        return Err(TimelineError::InvalidInput(format!(
            "Beat threshold must be in (0, 1), got {}",
            beat_threshold
        )));
    }

    log::debug!(
        "Extracting beats from {} samples at {} Hz, threshold={:.3}",
        samples.len(),
        sample_rate,
        beat_threshold
    );

    let mut times = Vec::new();
    let mut gaps = Vec::new();
    let mut latch = EdgeLatch::new();

    for (i, &value) in samples.iter().enumerate() {
        if value > beat_threshold && !latch.on_beat {
            let time = i as f32 / sample_rate as f32;
            gaps.push(time - latch.last_beat);
            latch.last_beat = time;
            times.push(time);
            latch.on_beat = true;
        } else if value <= beat_threshold {
            latch.on_beat = false;
        }
    }

    if times.len() < 2 {
        return Err(TimelineError::InsufficientBeats(format!(
            "detected {} beats in {} samples; need at least 2 (adjust the beat threshold)",
            times.len(),
            samples.len()
        )));
    }

    log::debug!("Extracted {} raw beats", times.len());

    Ok(RawBeats { times, gaps })
}
