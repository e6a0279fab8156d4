//! Beat-matched concat filtergraph assembly
//!
//! Builds the ffmpeg command that cuts the overlay loop clip into one
//! segment per beat delay, time-scales each segment to its delay, and
//! concatenates the segments over the audio track. Segment `i` uses the
//! overlay clip's beat `i mod n_beats`, so the loop repeats for as long as
//! the music runs.

use std::path::Path;

use crate::error::TimelineError;
use crate::render::{shell_quote, RenderConfig};

/// Assemble the trim/time-scale/concat ffmpeg command
///
/// For each beat delay, segment `i` trims overlay frames
/// `[(i mod n_beats) * frames_per_beat, (i mod n_beats + 1) * frames_per_beat)`
/// and scales its presentation timestamps by `delay * beats_per_second`.
/// The segments are concatenated into one video stream, muxed with the
/// audio track, and written to `output_video`.
///
/// # Arguments
///
/// * `overlay_video` - The overlay loop clip to re-time
/// * `input_audio` - Audio track muxed into the output
/// * `output_video` - Where the command writes the re-timed video
/// * `config` - Overlay clip parameters
/// * `beat_delays` - Corrected inter-beat delays in seconds
///
/// # Returns
///
/// The complete ffmpeg command line
///
/// # Errors
///
/// Returns `TimelineError::InvalidInput` for an empty delay sequence or a
/// zero `n_beats`.
pub fn concat_command(
    overlay_video: &Path,
    input_audio: &Path,
    output_video: &Path,
    config: &RenderConfig,
    beat_delays: &[f32],
) -> Result<String, TimelineError> {
    if beat_delays.is_empty() {
        return Err(TimelineError::InvalidInput(
            "No beat delays to render".to_string(),
        ));
    }

    if config.n_beats == 0 {
        return Err(TimelineError::InvalidInput(
            "Overlay clip must contain at least one beat".to_string(),
        ));
    }

    let overlay_video = shell_quote(&overlay_video.to_string_lossy());
    let input_audio = shell_quote(&input_audio.to_string_lossy());
    let output_video = shell_quote(&output_video.to_string_lossy());

    let mut command = format!(
        "ffmpeg -y -i {} -i {} -filter_complex \\\n\"",
        overlay_video, input_audio
    );

    for (i, &delay) in beat_delays.iter().enumerate() {
        let beat = i as u32 % config.n_beats;
        let start_frame = config.frames_per_beat * beat;
        let end_frame = config.frames_per_beat * (beat + 1);
        let scale_factor = delay * config.beats_per_second;
        command.push_str(&format!(
            "[0:v]trim=start_frame={}:end_frame={},setpts=(PTS-STARTPTS)*{}[v{}]; \\\n",
            start_frame, end_frame, scale_factor, i
        ));
    }

    for i in 0..beat_delays.len() {
        command.push_str(&format!("[v{}]", i));
    }

    command.push_str(&format!(
        "concat=n={}:v=1[new]\" -c:a aac -map \"[new]\" -map 1:a:0 {}",
        beat_delays.len(),
        output_video
    ));

    Ok(command)
}
