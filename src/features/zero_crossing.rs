//! Dominant frequency estimation via zero-crossing rate
//!
//! Counts sign changes between consecutive samples over a bounded window and
//! converts the crossing rate to an approximate frequency: each full cycle of
//! a periodic signal produces two zero crossings.
//!
//! Known limitation: accurate only for quasi-monotone signals; multi-harmonic
//! or noisy input biases the estimate upward. This is an accepted heuristic,
//! not a spectral estimate.

/// Dominant frequency estimate plus the raw crossing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominantFrequency {
    /// Estimated dominant frequency in Hz
    pub frequency_hz: u32,

    /// Raw zero-crossing count over the analysis window
    pub zero_crossings: usize,
}

/// Estimate the dominant frequency of a sample array.
///
/// The analysis window is bounded to `min(duration, max_window_s)` seconds
/// to cap cost on long recordings. A crossing is counted when
/// `sample[i] >= 0` differs in truth value from `sample[i-1] >= 0`.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono)
/// * `sample_rate` - Sample rate in Hz
/// * `max_window_s` - Window cap in seconds (10 s default)
pub fn dominant_frequency(
    samples: &[f32],
    sample_rate: u32,
    max_window_s: f32,
) -> DominantFrequency {
    let duration = samples.len() as f32 / sample_rate as f32;
    let window = duration.min(max_window_s);

    if window <= 0.0 {
        return DominantFrequency {
            frequency_hz: 0,
            zero_crossings: 0,
        };
    }

    let cap = samples.len().min((sample_rate as f32 * window) as usize);

    let mut crossings = 0usize;
    for i in 1..cap {
        if (samples[i] >= 0.0) != (samples[i - 1] >= 0.0) {
            crossings += 1;
        }
    }

    let frequency_hz = (crossings as f32 / (2.0 * window)).round() as u32;

    log::debug!(
        "Zero crossings: {} over {:.2}s window -> {} Hz",
        crossings,
        window,
        frequency_hz
    );

    DominantFrequency {
        frequency_hz,
        zero_crossings: crossings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, duration_s: f32, sample_rate: f32) -> Vec<f32> {
        let n = (duration_s * sample_rate) as usize;
        (0..n)
            .map(|i| {
                let t = i as f32 / sample_rate;
                (2.0 * std::f32::consts::PI * freq * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_pure_sine_100hz() {
        let samples = sine(100.0, 5.0, 44100.0);
        let dom = dominant_frequency(&samples, 44100, 10.0);
        assert!(
            (dom.frequency_hz as i32 - 100).abs() <= 5,
            "expected ~100 Hz, got {}",
            dom.frequency_hz
        );
    }

    #[test]
    fn test_pure_sine_440hz() {
        let samples = sine(440.0, 2.0, 44100.0);
        let dom = dominant_frequency(&samples, 44100, 10.0);
        assert!(
            (dom.frequency_hz as i32 - 440).abs() <= 5,
            "expected ~440 Hz, got {}",
            dom.frequency_hz
        );
    }

    #[test]
    fn test_silence_is_zero() {
        // All-zero samples never change sign
        let samples = vec![0.0f32; 44100 * 5];
        let dom = dominant_frequency(&samples, 44100, 10.0);
        assert_eq!(dom.frequency_hz, 0);
        assert_eq!(dom.zero_crossings, 0);
    }

    #[test]
    fn test_window_cap_bounds_work() {
        // 30s recording, window capped to 10s: crossings counted over the
        // first 10s only, divisor is the capped window
        let samples = sine(50.0, 30.0, 44100.0);
        let dom = dominant_frequency(&samples, 44100, 10.0);
        assert!(
            (dom.frequency_hz as i32 - 50).abs() <= 5,
            "expected ~50 Hz, got {}",
            dom.frequency_hz
        );
        // 50 Hz * 2 crossings * 10s = ~1000 crossings
        assert!(dom.zero_crossings >= 990 && dom.zero_crossings <= 1010);
    }

    #[test]
    fn test_empty_samples() {
        let dom = dominant_frequency(&[], 44100, 10.0);
        assert_eq!(dom.frequency_hz, 0);
        assert_eq!(dom.zero_crossings, 0);
    }

    #[test]
    fn test_short_recording_uses_actual_duration() {
        // 1s of 100 Hz: ~200 crossings / (2 * 1s) = 100 Hz
        let samples = sine(100.0, 1.0, 44100.0);
        let dom = dominant_frequency(&samples, 44100, 10.0);
        assert!(
            (dom.frequency_hz as i32 - 100).abs() <= 5,
            "expected ~100 Hz, got {}",
            dom.frequency_hz
        );
    }
}
