//! Configuration parameters for timeline reconstruction

/// Timeline reconstruction configuration parameters
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    // Beat extraction
    /// Likelihood cutoff for beat detection, in (0, 1) (default: 0.5)
    /// Raise this value if too many spurious beats are detected, and vice versa
    pub beat_threshold: f32,

    // Gap classification
    /// Standard-deviation multiple below the median gap used for the
    /// short-gap cutoff (default: 0.25)
    pub short_outlier_cutoff: f32,

    /// Standard-deviation multiple above the median gap used for the
    /// long-gap cutoff (default: 0.25)
    pub long_outlier_cutoff: f32,

    // Output assembly
    /// Constant shift in seconds applied to the first output delay only
    /// (default: 0.0)
    pub offset: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            beat_threshold: 0.5,
            short_outlier_cutoff: 0.25,
            long_outlier_cutoff: 0.25,
            offset: 0.0,
        }
    }
}
