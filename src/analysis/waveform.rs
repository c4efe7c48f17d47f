//! Waveform display summarization
//!
//! Reduces a sample array to one min/max amplitude pair per display column,
//! the pure kernel behind waveform rendering. Presentation layers own the
//! actual drawing; this keeps the engine free of rendering side effects.

/// Amplitude extrema of one display column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformBin {
    /// Minimum sample value in the column's stride
    pub min: f32,
    /// Maximum sample value in the column's stride
    pub max: f32,
}

/// Summarize samples into `width` min/max bins.
///
/// Stride is `max(1, len / width)`; columns past the end of a short
/// recording collapse to silence (0, 0).
pub fn summarize_waveform(samples: &[f32], width: usize) -> Vec<WaveformBin> {
    if width == 0 {
        return Vec::new();
    }

    let step = (samples.len() / width).max(1);

    (0..width)
        .map(|x| {
            let start = x * step;
            let end = (start + step).min(samples.len());

            let mut bin = WaveformBin { min: 0.0, max: 0.0 };
            if start < end {
                bin.min = 1.0;
                bin.max = -1.0;
                for &v in &samples[start..end] {
                    if v > bin.max {
                        bin.max = v;
                    }
                    if v < bin.min {
                        bin.min = v;
                    }
                }
            }
            bin
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_matches_request() {
        let samples = vec![0.0f32; 44100];
        let bins = summarize_waveform(&samples, 900);
        assert_eq!(bins.len(), 900);
    }

    #[test]
    fn test_extrema_captured() {
        let mut samples = vec![0.0f32; 1000];
        samples[500] = 0.9;
        samples[501] = -0.7;
        let bins = summarize_waveform(&samples, 10);
        // Both extremes land in column 5 (stride 100)
        assert!((bins[5].max - 0.9).abs() < 1e-6);
        assert!((bins[5].min + 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_short_buffer_pads_with_silence() {
        let samples = vec![0.5f32; 10];
        let bins = summarize_waveform(&samples, 100);
        // Stride clamps to 1; columns past the data are silent
        assert!((bins[0].max - 0.5).abs() < 1e-6);
        assert_eq!(bins[50].max, 0.0);
        assert_eq!(bins[50].min, 0.0);
    }

    #[test]
    fn test_zero_width() {
        assert!(summarize_waveform(&[0.1, 0.2], 0).is_empty());
    }
}
