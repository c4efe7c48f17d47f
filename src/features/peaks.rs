//! Refractory-gated peak detection over the energy envelope
//!
//! Greedy left-to-right scan for strict interior local maxima above an
//! adaptive threshold, with a minimum gap between accepted events modeling
//! the cardiac refractory period.
//!
//! Algorithm:
//! 1. Threshold = mean(envelope) * threshold_ratio
//! 2. Scan frames 1..len-1 for env[i] > threshold, env[i] > env[i-1],
//!    env[i] > env[i+1] (strict interior maxima)
//! 3. Accept a candidate only if it is the first peak or its distance from
//!    the last accepted peak exceeds the minimum gap
//!
//! No backtracking or global reconsideration: ties never fire twice because
//! the strict-maximum and gap conditions exclude adjacent candidates.

use crate::features::envelope::Envelope;

/// Detect cardiac events in an energy envelope.
///
/// # Arguments
///
/// * `envelope` - RMS energy envelope
/// * `sample_rate` - Sample rate in Hz
/// * `threshold_ratio` - Threshold multiplier over the envelope mean
/// * `refractory_s` - Minimum spacing between accepted events in seconds
///
/// # Returns
///
/// Strictly increasing frame indices of accepted peaks. Consecutive indices
/// always differ by more than `floor(sample_rate * refractory_s / frame_size)`
/// frames. Degrades to empty for an empty or flat envelope; an all-zero
/// envelope yields no peaks since no frame strictly exceeds its neighbors.
pub fn detect_peaks(
    envelope: &Envelope,
    sample_rate: u32,
    threshold_ratio: f32,
    refractory_s: f32,
) -> Vec<usize> {
    let mean = match envelope.mean() {
        Some(m) => m,
        None => return Vec::new(),
    };

    let threshold = mean * threshold_ratio;
    let min_gap = (sample_rate as f32 * refractory_s) as usize / envelope.frame_size;
    let env = &envelope.frames;

    let mut peaks: Vec<usize> = Vec::new();

    for i in 1..env.len().saturating_sub(1) {
        if env[i] > threshold && env[i] > env[i - 1] && env[i] > env[i + 1] {
            match peaks.last().copied() {
                Some(last) if i - last <= min_gap => {}
                _ => peaks.push(i),
            }
        }
    }

    log::debug!(
        "Peak detection: threshold={:.6}, min_gap={} frames, {} peaks",
        threshold,
        min_gap,
        peaks.len()
    );

    peaks
}
