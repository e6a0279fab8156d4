//! Render command assembly
//!
//! Assembles the two ffmpeg invocations that consume the corrected beat
//! delays: a per-beat trim/time-scale/concat filtergraph that re-times the
//! overlay loop clip to the music, and a chroma-key composite that lays the
//! re-timed clip over the base video. The commands are emitted as shell
//! text for a render script; nothing is executed here.

pub mod filtergraph;
pub mod overlay;

/// Overlay clip description and compositing parameters
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Beats per second in the overlay loop clip (default: 2.0)
    pub beats_per_second: f32,

    /// Frames per beat in the overlay loop clip (default: 15)
    pub frames_per_beat: u32,

    /// Number of beats in the overlay loop clip (default: 20)
    pub n_beats: u32,

    /// ffmpeg colorkey filter argument for compositing
    /// (default: "0x2bd51b:0.15:0.15")
    pub colorkey: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            beats_per_second: 2.0,
            frames_per_beat: 15,
            n_beats: 20,
            colorkey: "0x2bd51b:0.15:0.15".to_string(),
        }
    }
}

/// Quote a string for a POSIX shell
///
/// Strings made only of shell-safe characters pass through unchanged;
/// anything else is wrapped in single quotes with embedded single quotes
/// escaped.
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }

    let safe = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\"'\"'"))
    }
}
