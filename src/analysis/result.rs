//! Timeline reconstruction result types

use serde::{Deserialize, Serialize};

use crate::timeline::classifier::GapStatistics;

/// Complete timeline reconstruction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineResult {
    /// Raw detected beat onset times in seconds
    pub raw_beats: Vec<f32>,

    /// Corrected beat timeline in seconds, with pauses filled
    pub corrected_beats: Vec<f32>,

    /// Inter-beat delays derived from the corrected timeline
    ///
    /// `beat_delays[0]` is the first corrected beat time (plus the
    /// configured offset); each later entry is the spacing to the previous
    /// corrected beat. Prefix sums of the unshifted delays reproduce the
    /// corrected timeline.
    pub beat_delays: Vec<f32>,

    /// Trimmed-mean tempo estimate in beats per minute, from the raw gaps
    pub tempo_bpm: f32,

    /// Gap statistics and classification cutoffs
    pub gap_statistics: GapStatistics,

    /// Reconstruction metadata
    pub metadata: TimelineMetadata,
}

/// Reconstruction metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineMetadata {
    /// Likelihood sequence duration in seconds
    pub duration_seconds: f32,

    /// Likelihood sample rate in Hz
    pub sample_rate: u32,

    /// Number of raw detected beats
    pub raw_beat_count: usize,

    /// Number of beats emitted by pause filling
    pub synthetic_beat_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}
