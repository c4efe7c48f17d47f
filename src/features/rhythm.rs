//! Rhythm estimation from inter-event intervals
//!
//! Converts accepted peak frame positions into inter-event intervals in
//! seconds, derives the average interval, a clamped BPM estimate and the
//! coefficient of variation of the intervals, and classifies rhythm
//! regularity from the CV.

use crate::analysis::result::RhythmClass;
use crate::config::AnalysisConfig;

/// Interval statistics derived from consecutive peak events.
///
/// Undefined (the estimator returns `None`) when fewer than two peaks exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalStats {
    /// Average inter-event interval in seconds
    pub avg_interval: f32,

    /// Beats per minute, round(60 / avg_interval) clamped to the
    /// physiological plausibility bounds
    pub bpm: u32,

    /// Coefficient of variation of the intervals (population stdev / mean)
    pub cv: f32,
}

/// Derive interval statistics from peak frame indices.
///
/// Intervals are `(p[i+1] - p[i]) * frame_size / sample_rate` seconds. The
/// BPM clamp guards against near-zero average intervals; the CV uses
/// population variance (divide by N, not N-1).
///
/// # Returns
///
/// `None` when fewer than two peaks exist.
pub fn estimate_intervals(
    peaks: &[usize],
    frame_size: usize,
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Option<IntervalStats> {
    if peaks.len() < 2 {
        log::debug!("Rhythm estimation: {} peaks, need at least 2", peaks.len());
        return None;
    }

    let intervals: Vec<f32> = peaks
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f32 * frame_size as f32 / sample_rate as f32)
        .collect();

    let avg_interval = intervals.iter().sum::<f32>() / intervals.len() as f32;

    let bpm = ((60.0 / avg_interval).round() as i64)
        .clamp(config.min_bpm as i64, config.max_bpm as i64) as u32;

    let variance = intervals
        .iter()
        .map(|&x| (x - avg_interval).powi(2))
        .sum::<f32>()
        / intervals.len() as f32;
    let cv = variance.sqrt() / avg_interval;

    log::debug!(
        "Rhythm estimation: {} intervals, avg={:.3}s, bpm={}, cv={:.4}",
        intervals.len(),
        avg_interval,
        bpm,
        cv
    );

    Some(IntervalStats {
        avg_interval,
        bpm,
        cv,
    })
}

/// Classify rhythm regularity from interval statistics.
///
/// Thresholds (exact, part of the output contract):
/// - cv < 0.08: regular sinus
/// - 0.08 <= cv < 0.20: mildly irregular
/// - cv >= 0.20: irregular
/// - no statistics: insufficient data
pub fn classify_rhythm(stats: Option<&IntervalStats>, config: &AnalysisConfig) -> RhythmClass {
    match stats {
        None => RhythmClass::InsufficientData,
        Some(s) if s.cv < config.cv_regular => RhythmClass::RegularSinus,
        Some(s) if s.cv < config.cv_irregular => RhythmClass::MildlyIrregular,
        Some(_) => RhythmClass::Irregular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn test_fewer_than_two_peaks_is_none() {
        assert!(estimate_intervals(&[], 1102, 44100, &config()).is_none());
        assert!(estimate_intervals(&[7], 1102, 44100, &config()).is_none());
    }

    #[test]
    fn test_perfectly_regular_intervals() {
        // 30 frames * 1102 samples / 44100 Hz = 0.7497s per interval -> 80 BPM
        let peaks: Vec<usize> = (0..10).map(|i| i * 30).collect();
        let stats = estimate_intervals(&peaks, 1102, 44100, &config()).unwrap();

        assert!((stats.avg_interval - 0.7497).abs() < 1e-3);
        assert_eq!(stats.bpm, 80);
        assert!(stats.cv < 1e-6, "constant intervals must have zero CV");
        assert_eq!(
            classify_rhythm(Some(&stats), &config()),
            RhythmClass::RegularSinus
        );
    }

    #[test]
    fn test_bpm_clamped_low() {
        // Two peaks 4 seconds apart -> 15 BPM raw, clamped to 30
        let peaks = vec![0, 160]; // 160 * 1102 / 44100 = 4.0s
        let stats = estimate_intervals(&peaks, 1102, 44100, &config()).unwrap();
        assert_eq!(stats.bpm, 30);
    }

    #[test]
    fn test_bpm_clamped_high() {
        // Intervals of ~0.2s -> 300 BPM raw, clamped to 220
        let peaks = vec![0, 8, 16, 24];
        let stats = estimate_intervals(&peaks, 1102, 44100, &config()).unwrap();
        assert_eq!(stats.bpm, 220);
    }

    #[test]
    fn test_cv_population_variance() {
        // Intervals of 20 and 40 frames: mean 30, population stdev 10
        let peaks = vec![0, 20, 60];
        let stats = estimate_intervals(&peaks, 1102, 44100, &config()).unwrap();
        assert!((stats.cv - 10.0 / 30.0).abs() < 1e-5);
    }

    #[test]
    fn test_classification_thresholds() {
        let cfg = config();
        let with_cv = |cv: f32| IntervalStats {
            avg_interval: 0.8,
            bpm: 75,
            cv,
        };

        assert_eq!(
            classify_rhythm(Some(&with_cv(0.0)), &cfg),
            RhythmClass::RegularSinus
        );
        assert_eq!(
            classify_rhythm(Some(&with_cv(0.079)), &cfg),
            RhythmClass::RegularSinus
        );
        // Boundary: 0.08 is already mildly irregular
        assert_eq!(
            classify_rhythm(Some(&with_cv(0.08)), &cfg),
            RhythmClass::MildlyIrregular
        );
        assert_eq!(
            classify_rhythm(Some(&with_cv(0.19)), &cfg),
            RhythmClass::MildlyIrregular
        );
        // Boundary: 0.20 is already irregular
        assert_eq!(
            classify_rhythm(Some(&with_cv(0.20)), &cfg),
            RhythmClass::Irregular
        );
        assert_eq!(
            classify_rhythm(Some(&with_cv(0.5)), &cfg),
            RhythmClass::Irregular
        );
        assert_eq!(classify_rhythm(None, &cfg), RhythmClass::InsufficientData);
    }

    #[test]
    fn test_irregular_intervals_classified() {
        // Wildly varying intervals
        let peaks = vec![0, 12, 50, 65, 130];
        let stats = estimate_intervals(&peaks, 1102, 44100, &config()).unwrap();
        assert!(stats.cv >= 0.20);
        assert_eq!(
            classify_rhythm(Some(&stats), &config()),
            RhythmClass::Irregular
        );
    }
}
