//! Integration tests for the beat timeline engine

use beatline::{reconstruct_timeline, TimelineConfig, TimelineError};

/// Build a likelihood curve with a 3-sample pulse of 0.9 at each beat time
fn pulse_train(len: usize, sample_rate: u32, beat_times: &[f32]) -> Vec<f32> {
    let mut samples = vec![0.0f32; len];
    for &t in beat_times {
        let start = (t * sample_rate as f32).round() as usize;
        for i in start..(start + 3).min(len) {
            samples[i] = 0.9;
        }
    }
    samples
}

/// Beat times every `spacing` seconds over `[spacing, end]`
fn regular_beats(spacing: f32, end: f32) -> Vec<f32> {
    let mut times = Vec::new();
    let mut t = spacing;
    while t <= end + 1e-6 {
        times.push(t);
        t += spacing;
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_pause_fill() {
        // 1000 samples at 100 Hz: beats every 0.5s, except a 3.0s pause
        // after the beat at 4.0s
        let mut beat_times = regular_beats(0.5, 4.0);
        beat_times.extend(regular_beats(0.5, 3.0).iter().map(|t| t + 6.5));
        let samples = pulse_train(1000, 100, &beat_times);

        let config = TimelineConfig::default();
        let result =
            reconstruct_timeline(&samples, 100, config).expect("Reconstruction should succeed");

        assert_eq!(result.metadata.raw_beat_count, 14);
        assert_eq!(result.metadata.sample_rate, 100);
        assert!((result.metadata.duration_seconds - 10.0).abs() < 1e-6);

        // The 3.0s pause becomes round(3.0/0.5) = 6 beats at ~0.5s spacing
        assert_eq!(result.metadata.synthetic_beat_count, 6);
        assert_eq!(result.corrected_beats.len(), 19);
        for window in result.corrected_beats.windows(2) {
            let spacing = window[1] - window[0];
            assert!(
                (spacing - 0.5).abs() < 0.05,
                "corrected spacing should be ~0.5s, got {:.3}s",
                spacing
            );
        }

        // Tempo comes from the un-paused gaps
        assert!(
            (result.tempo_bpm - 120.0).abs() < 0.5,
            "tempo should be ~120 bpm, got {:.2}",
            result.tempo_bpm
        );

        assert_eq!(result.beat_delays.len(), result.corrected_beats.len());
    }

    #[test]
    fn test_corrected_timeline_is_strictly_increasing() {
        let mut beat_times = regular_beats(0.5, 5.0);
        beat_times.push(9.0);
        beat_times.push(9.5);
        let samples = pulse_train(1000, 100, &beat_times);

        let result = reconstruct_timeline(&samples, 100, TimelineConfig::default()).unwrap();

        for window in result.corrected_beats.windows(2) {
            assert!(
                window[1] > window[0],
                "timeline not strictly increasing: {} then {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_delays_reconstruct_timeline() {
        let mut beat_times = regular_beats(0.5, 5.0);
        beat_times.extend_from_slice(&[8.0, 8.5, 9.0]);
        let samples = pulse_train(1000, 100, &beat_times);

        let result = reconstruct_timeline(&samples, 100, TimelineConfig::default()).unwrap();

        let mut sum = 0.0f32;
        for (i, &delay) in result.beat_delays.iter().enumerate() {
            sum += delay;
            assert!(
                (sum - result.corrected_beats[i]).abs() < 1e-3,
                "prefix sum {:.4} diverged from corrected beat {:.4} at index {}",
                sum,
                result.corrected_beats[i],
                i
            );
        }
    }

    #[test]
    fn test_offset_shifts_first_delay_only() {
        let beat_times = regular_beats(0.5, 5.0);
        let samples = pulse_train(600, 100, &beat_times);

        let base = reconstruct_timeline(&samples, 100, TimelineConfig::default()).unwrap();
        let shifted = reconstruct_timeline(
            &samples,
            100,
            TimelineConfig {
                offset: 0.2,
                ..TimelineConfig::default()
            },
        )
        .unwrap();

        assert!(
            (shifted.beat_delays[0] - base.beat_delays[0] - 0.2).abs() < 1e-6,
            "first delay should shift by exactly the offset"
        );
        for i in 1..base.beat_delays.len() {
            assert!(
                (shifted.beat_delays[i] - base.beat_delays[i]).abs() < 1e-6,
                "delay {} should be unchanged by the offset",
                i
            );
        }
    }

    #[test]
    fn test_sustained_excursion_counts_once() {
        // A curve that stays above threshold for 20 samples is one beat
        let mut samples = vec![0.0f32; 800];
        for beat_start in [100usize, 200, 300, 400, 500] {
            for i in beat_start..beat_start + 20 {
                samples[i] = 0.7;
            }
        }

        let result = reconstruct_timeline(&samples, 100, TimelineConfig::default()).unwrap();
        assert_eq!(result.metadata.raw_beat_count, 5);
    }

    #[test]
    fn test_short_gap_does_not_drop_beats() {
        // An anomalously short gap sits below the lower cutoff, but the
        // lower cutoff is never applied: no beat is dropped
        let beat_times = regular_beats(0.5, 5.0);
        let mut with_extra = beat_times.clone();
        with_extra.push(2.1);
        with_extra.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let base = reconstruct_timeline(
            &pulse_train(600, 100, &beat_times),
            100,
            TimelineConfig::default(),
        )
        .unwrap();
        let extra = reconstruct_timeline(
            &pulse_train(600, 100, &with_extra),
            100,
            TimelineConfig::default(),
        )
        .unwrap();

        assert!(
            extra.gap_statistics.lower > 0.1,
            "the 0.1s gap should sit below the lower cutoff"
        );
        assert_eq!(base.corrected_beats.len(), base.metadata.raw_beat_count);
        assert_eq!(
            extra.corrected_beats.len(),
            extra.metadata.raw_beat_count,
            "a short gap must not reduce the emitted beat count"
        );
        assert_eq!(extra.corrected_beats.len(), base.corrected_beats.len() + 1);
    }

    #[test]
    fn test_silence_is_insufficient_beats() {
        let samples = vec![0.0f32; 1000];
        let result = reconstruct_timeline(&samples, 100, TimelineConfig::default());
        assert!(matches!(result, Err(TimelineError::InsufficientBeats(_))));
    }

    #[test]
    fn test_four_beats_is_insufficient_for_tempo() {
        let samples = pulse_train(300, 100, &[0.5, 1.0, 1.5, 2.0]);
        let result = reconstruct_timeline(&samples, 100, TimelineConfig::default());
        assert!(matches!(
            result,
            Err(TimelineError::InsufficientTempoSample(_))
        ));
    }

    #[test]
    fn test_result_serializes_to_json() {
        let beat_times = regular_beats(0.5, 5.0);
        let samples = pulse_train(600, 100, &beat_times);
        let result = reconstruct_timeline(&samples, 100, TimelineConfig::default()).unwrap();

        let json = serde_json::to_string(&result).expect("result should serialize");
        let parsed: beatline::TimelineResult =
            serde_json::from_str(&json).expect("result should deserialize");
        assert_eq!(parsed.corrected_beats.len(), result.corrected_beats.len());
        assert_eq!(parsed.metadata.raw_beat_count, result.metadata.raw_beat_count);
    }
}
