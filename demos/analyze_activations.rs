//! Example: reconstruct a beat timeline from a likelihood dump
//!
//! This example demonstrates how to analyse an activation dump and print
//! the reconstruction results.

use beatline::{reconstruct_timeline, TimelineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "activations.txt".to_string());

    let samples = beatline::io::activations::read_activations(path.as_ref())?;
    let sample_rate = 100;

    // Configure reconstruction
    let config = TimelineConfig::default();

    // Reconstruct
    let result = reconstruct_timeline(&samples, sample_rate, config)?;

    // Print results
    println!("Reconstruction Results:");
    println!("  Tempo: {:.2} bpm", result.tempo_bpm);
    println!(
        "  Beats: {} raw, {} corrected ({} synthetic)",
        result.metadata.raw_beat_count,
        result.corrected_beats.len(),
        result.metadata.synthetic_beat_count
    );
    println!(
        "  Gap median: {:.3}s (std {:.3}, cutoffs {:.3}/{:.3})",
        result.gap_statistics.median,
        result.gap_statistics.std_dev,
        result.gap_statistics.lower,
        result.gap_statistics.upper
    );
    println!(
        "  Processing time: {:.2} ms",
        result.metadata.processing_time_ms
    );

    Ok(())
}
