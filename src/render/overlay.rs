//! Chroma-key overlay compositing command
//!
//! Builds the second ffmpeg command of the render script: key out the
//! overlay clip's background color, composite the result into the bottom
//! left of the base video, clean up the green spill, and mux the overlay's
//! audio track into the final output.

use std::path::Path;

use crate::render::shell_quote;

/// Assemble the chroma-key composite ffmpeg command
///
/// The overlay video (the beat-matched intermediate) is color-keyed with
/// `colorkey`, overlaid onto the base video anchored to the bottom edge,
/// despilled, and converted to yuv420p for broad player compatibility.
///
/// # Arguments
///
/// * `input_video` - Base video to composite onto
/// * `overlay_video` - Keyed overlay video; its audio track is carried over
/// * `colorkey` - ffmpeg colorkey filter argument (color:similarity:blend)
/// * `output_video` - Final output path
///
/// # Returns
///
/// The complete ffmpeg command line
pub fn overlay_command(
    input_video: &Path,
    overlay_video: &Path,
    colorkey: &str,
    output_video: &Path,
) -> String {
    let input_video = shell_quote(&input_video.to_string_lossy());
    let overlay_video = shell_quote(&overlay_video.to_string_lossy());
    let output_video = shell_quote(&output_video.to_string_lossy());

    format!(
        "ffmpeg -y -i {} -i {} -filter_complex \"[1:v]colorkey={}[ckout];\
         [0:v][ckout]overlay=0:main_h-overlay_h[despill];\
         [despill] despill=green[colorspace];\
         [colorspace]format=yuv420p[out]\" -map \"[out]\" -map 1:a:0 {}",
        input_video, overlay_video, colorkey, output_video
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_overlay_command_structure() {
        let cmd = overlay_command(
            &PathBuf::from("base.mp4"),
            &PathBuf::from("intermediate.mp4"),
            "0x2bd51b:0.15:0.15",
            &PathBuf::from("final.mp4"),
        );

        assert!(cmd.starts_with("ffmpeg -y -i base.mp4 -i intermediate.mp4"));
        assert!(cmd.contains("[1:v]colorkey=0x2bd51b:0.15:0.15[ckout]"));
        assert!(cmd.contains("[0:v][ckout]overlay=0:main_h-overlay_h[despill]"));
        assert!(cmd.contains("despill=green"));
        assert!(cmd.contains("format=yuv420p[out]"));
        assert!(cmd.ends_with("-map \"[out]\" -map 1:a:0 final.mp4"));
    }

    #[test]
    fn test_overlay_paths_are_quoted() {
        let cmd = overlay_command(
            &PathBuf::from("my video.mp4"),
            &PathBuf::from("intermediate.mp4"),
            "0x2bd51b:0.15:0.15",
            &PathBuf::from("final.mp4"),
        );

        assert!(cmd.contains("'my video.mp4'"));
    }
}
