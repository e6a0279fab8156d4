//! # Beatline
//!
//! A beat timeline reconstruction engine for beat-matched video rendering.
//! Takes the per-frame "beat likelihood" curve produced by an external
//! onset estimator and turns it into a cleaned, monotonically increasing
//! sequence of beat timestamps and inter-beat delays, ready to drive a
//! time-stretch/concatenation render.
//!
//! ## Features
//!
//! - **Beat Extraction**: rising-edge threshold crossing with debounce
//! - **Pause Filling**: long gaps re-expressed as evenly spaced beats at
//!   the surrounding tempo
//! - **Tempo Estimation**: outlier-robust trimmed-mean bpm figure
//! - **Render Assembly**: ffmpeg filtergraph and chroma-key commands built
//!   from the corrected delays
//!
//! ## Quick Start
//!
//! ```no_run
//! use beatline::{reconstruct_timeline, TimelineConfig};
//!
//! // Likelihood curve from the external estimator (one value per frame)
//! let samples: Vec<f32> = vec![]; // Your activation data
//! let sample_rate = 100;
//!
//! let result = reconstruct_timeline(&samples, sample_rate, TimelineConfig::default())?;
//!
//! println!("Tempo: {:.2} bpm", result.tempo_bpm);
//! println!("{} corrected beats", result.corrected_beats.len());
//! # Ok::<(), beatline::TimelineError>(())
//! ```
//!
//! ## Architecture
//!
//! The reconstruction pipeline follows this flow:
//!
//! ```text
//! Likelihood Curve → Beat Extraction → Gap Classification → Pause Filling → Beat Delays
//!                          ↓
//!                   Tempo Estimation
//! ```
//!
//! Everything is a pure, single-pass function of the input sequence and the
//! configuration; there is no internal state between invocations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod render;
pub mod timeline;

// Re-export main types
pub use analysis::result::{TimelineMetadata, TimelineResult};
pub use config::TimelineConfig;
pub use error::TimelineError;
pub use timeline::classifier::GapStatistics;

/// Main reconstruction function
///
/// Runs the full pipeline over a likelihood sequence: beat extraction, gap
/// classification, pause filling, delay derivation, and tempo estimation.
///
/// # Arguments
///
/// * `samples` - Likelihood values, one per frame, as produced by the
///   external onset estimator
/// * `sample_rate` - Frame rate of the likelihood sequence in Hz
///   (typically 100)
/// * `config` - Reconstruction configuration parameters
///
/// # Returns
///
/// `TimelineResult` containing the raw and corrected beat timelines, the
/// inter-beat delays, the tempo estimate, and gap diagnostics
///
/// # Errors
///
/// Returns `TimelineError` if any stage fails: too few beats detected, too
/// few intervals for the tempo estimate, or a degenerate pause fill. A
/// failure indicates unsuitable input (typically a misconfigured
/// threshold), never a partial result.
///
/// # Example
///
/// ```no_run
/// use beatline::{reconstruct_timeline, TimelineConfig};
///
/// let samples = vec![0.0f32; 100 * 30]; // 30 seconds of silence
/// let result = reconstruct_timeline(&samples, 100, TimelineConfig::default());
/// assert!(result.is_err()); // no beats in silence
/// ```
pub fn reconstruct_timeline(
    samples: &[f32],
    sample_rate: u32,
    config: TimelineConfig,
) -> Result<TimelineResult, TimelineError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting timeline reconstruction: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    // 1. Beat extraction
    let raw = timeline::extractor::extract_beats(samples, sample_rate, config.beat_threshold)?;

    // 2. Gap classification
    let (gap_statistics, labels) = timeline::classifier::classify_gaps(
        &raw.gaps,
        config.short_outlier_cutoff,
        config.long_outlier_cutoff,
    )?;

    // 3. Pause filling
    let corrected_beats = timeline::interpolator::fill_pauses(&raw.gaps, &labels)?;

    // 4. Tempo estimation, from the raw (uncorrected) beats
    let tempo_bpm = timeline::tempo::estimate_tempo(&raw.times)?;

    // 5. Delay derivation; the configured offset shifts the first delay only
    let mut beat_delays = Vec::with_capacity(corrected_beats.len());
    let mut last_beat = 0.0f32;
    for &beat in &corrected_beats {
        beat_delays.push(beat - last_beat);
        last_beat = beat;
    }
    if let Some(first) = beat_delays.first_mut() {
        *first += config.offset;
    }

    let normal_count = labels
        .iter()
        .filter(|&&l| l == timeline::classifier::GapLabel::Normal)
        .count();
    let synthetic_beat_count = corrected_beats.len().saturating_sub(normal_count);

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Reconstruction done: {} raw beats -> {} corrected ({} synthetic), {:.2} bpm, {:.2} ms",
        raw.times.len(),
        corrected_beats.len(),
        synthetic_beat_count,
        tempo_bpm,
        processing_time_ms
    );

    Ok(TimelineResult {
        metadata: TimelineMetadata {
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            sample_rate,
            raw_beat_count: raw.times.len(),
            synthetic_beat_count,
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        raw_beats: raw.times,
        corrected_beats,
        beat_delays,
        tempo_bpm,
        gap_statistics,
    })
}
