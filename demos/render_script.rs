//! Example: assemble render commands from a synthetic timeline
//!
//! This example demonstrates the render command assembly on a synthetic
//! likelihood curve with one long pause.

use std::path::Path;

use beatline::render::{filtergraph, overlay, RenderConfig};
use beatline::{reconstruct_timeline, TimelineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 20 seconds of beats at 120 bpm with a 3 second pause in the middle
    let mut samples = vec![0.0f32; 2000];
    for beat in 1..=39 {
        let t = beat as f32 * 0.5;
        if (7.0..10.0).contains(&t) {
            continue;
        }
        samples[(t * 100.0) as usize] = 0.9;
    }

    let result = reconstruct_timeline(&samples, 100, TimelineConfig::default())?;
    println!(
        "# {} beats at {:.1} bpm, {} synthetic",
        result.corrected_beats.len(),
        result.tempo_bpm,
        result.metadata.synthetic_beat_count
    );

    let config = RenderConfig::default();
    let concat = filtergraph::concat_command(
        Path::new("cat.mp4"),
        Path::new("song.wav"),
        Path::new("intermediate.mp4"),
        &config,
        &result.beat_delays,
    )?;
    let composite = overlay::overlay_command(
        Path::new("base.mp4"),
        Path::new("intermediate.mp4"),
        &config.colorkey,
        Path::new("final.mp4"),
    );

    println!("{}", concat);
    println!("{}", composite);

    Ok(())
}
