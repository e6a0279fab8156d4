//! Command-line front end
//!
//! Reads a beat likelihood dump, reconstructs the beat timeline, and writes
//! an executable render script containing the two ffmpeg commands that
//! produce the composited, beat-matched output video.

use std::path::PathBuf;

use clap::Parser;

use beatline::render::{self, RenderConfig};
use beatline::{reconstruct_timeline, TimelineConfig};

/// Generate a beat-matched overlay render script from a beat likelihood dump
#[derive(Parser, Debug)]
#[command(name = "beatline", version, about)]
struct Args {
    /// Likelihood activation dump to analyse (one value per frame)
    activations_file: PathBuf,

    /// Audio file the activations were computed from
    audio_file: PathBuf,

    /// Base video file to composite on top of
    video_file: PathBuf,

    /// Where the render script writes the resulting video file
    output_video_file: PathBuf,

    /// Path to output the render script to
    #[arg(long, default_value = "render.sh")]
    output_render_script: PathBuf,

    /// Path to the overlay video file
    #[arg(long, default_value = "cat.mp4")]
    overlay_video_file: PathBuf,

    /// Path to use as the intermediate file for the compositing step
    #[arg(long, default_value = "intermediate.mp4")]
    intermediate_output_file: PathBuf,

    /// Add a constant offset in seconds to the start of the fill pattern
    #[arg(long, default_value_t = 0.0)]
    offset: f32,

    /// The minimum certainty for a beat to be considered, between 0 and 1.
    /// Increase this value if spurious beats are found, and vice versa
    #[arg(long, default_value_t = 0.5)]
    beat_threshold: f32,

    /// Number of standard deviations from the median gap for the short
    /// pause cutoff
    #[arg(long, default_value_t = 0.25)]
    short_outlier_cutoff: f32,

    /// Number of standard deviations from the median gap for the long
    /// pause cutoff
    #[arg(long, default_value_t = 0.25)]
    long_outlier_cutoff: f32,

    /// Frame rate of the activation dump in Hz
    #[arg(long, default_value_t = 100)]
    sample_rate: u32,

    /// The number of beats per second in the overlay video
    #[arg(long, default_value_t = 2.0)]
    beats_per_second: f32,

    /// The number of frames per beat in the overlay video
    #[arg(long, default_value_t = 15)]
    frames_per_beat: u32,

    /// The number of beats present in the overlay video
    #[arg(long, default_value_t = 20)]
    n_beats: u32,

    /// The colorkey filter argument supplied to ffmpeg for compositing
    #[arg(long, default_value = "0x2bd51b:0.15:0.15")]
    colorkey: String,

    /// Print the full reconstruction result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let samples = beatline::io::activations::read_activations(&args.activations_file)?;

    let config = TimelineConfig {
        beat_threshold: args.beat_threshold,
        short_outlier_cutoff: args.short_outlier_cutoff,
        long_outlier_cutoff: args.long_outlier_cutoff,
        offset: args.offset,
    };

    let result = reconstruct_timeline(&samples, args.sample_rate, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Detected {} beats ({} synthetic) over {:.1}s, {:.2} bpm",
            result.corrected_beats.len(),
            result.metadata.synthetic_beat_count,
            result.metadata.duration_seconds,
            result.tempo_bpm
        );
    }

    let render_config = RenderConfig {
        beats_per_second: args.beats_per_second,
        frames_per_beat: args.frames_per_beat,
        n_beats: args.n_beats,
        colorkey: args.colorkey,
    };

    let concat = render::filtergraph::concat_command(
        &args.overlay_video_file,
        &args.audio_file,
        &args.intermediate_output_file,
        &render_config,
        &result.beat_delays,
    )?;
    let overlay = render::overlay::overlay_command(
        &args.video_file,
        &args.intermediate_output_file,
        &render_config.colorkey,
        &args.output_video_file,
    );

    let script = format!("{}\n{}\n", concat, overlay);
    std::fs::write(&args.output_render_script, script)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(&args.output_render_script)?.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        std::fs::set_permissions(&args.output_render_script, permissions)?;
    }

    println!(
        "Wrote render script to {}",
        args.output_render_script.display()
    );

    Ok(())
}
