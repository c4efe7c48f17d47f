//! Band-energy profiling via a time-domain framing heuristic
//!
//! Approximates the energy distribution across four coarse frequency bands
//! without any spectral transform: each band is assigned a synthetic frame
//! length derived from its center frequency, and the average per-frame
//! mean-square energy at that frame length stands in for the band's power.
//! This exploits frame-length-to-periodicity aliasing and is NOT a true
//! bandpass filter; the frame-length math does not generalize to other band
//! definitions without re-derivation.
//!
//! Algorithm (per band):
//! 1. spf = floor(sample_rate / midpoint), midpoint = (lo + hi) / 2
//! 2. Walk the samples in non-overlapping strides of spf; per complete
//!    frame, energy = sum of squares / spf
//! 3. Band power = average frame energy (0 when no complete frame fits)
//!
//! The four raw powers are then normalized to fractions of their sum.

use crate::analysis::result::BandProfile;

/// The four fixed heart-sound bands in Hz: murmur/rumble lows through
/// valve-click highs.
pub const BAND_RANGES: [(f32, f32); 4] = [
    (5.0, 50.0),
    (50.0, 150.0),
    (150.0, 300.0),
    (300.0, 1000.0),
];

/// Raw (unnormalized) power of a single band.
fn band_power(samples: &[f32], sample_rate: u32, lo: f32, hi: f32) -> f32 {
    let midpoint = (lo + hi) / 2.0;
    let spf = (sample_rate as f32 / midpoint) as usize;

    // Buffer shorter than one synthetic frame: zero complete frames,
    // guarded to zero power rather than dividing by zero.
    if spf == 0 || samples.len() < spf {
        return 0.0;
    }

    let mut power = 0.0f32;
    let mut count = 0usize;
    for frame in samples.chunks_exact(spf) {
        let energy: f32 = frame.iter().map(|&x| x * x).sum();
        power += energy / spf as f32;
        count += 1;
    }

    if count > 0 {
        power / count as f32
    } else {
        0.0
    }
}

/// Compute the normalized band-energy profile of a sample array.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// A [`BandProfile`] with four fractions in [0, 1] summing to 1.0, or all
/// zero when the total energy is zero (the normalizing divisor falls back
/// to 1 instead of dividing by zero).
pub fn band_profile(samples: &[f32], sample_rate: u32) -> BandProfile {
    let raw: Vec<f32> = BAND_RANGES
        .iter()
        .map(|&(lo, hi)| band_power(samples, sample_rate, lo, hi))
        .collect();

    let total: f32 = raw.iter().sum();
    let divisor = if total > 0.0 { total } else { 1.0 };

    let mut fractions = [0.0f32; 4];
    for (f, &p) in fractions.iter_mut().zip(raw.iter()) {
        *f = p / divisor;
    }

    log::debug!(
        "Band profile: raw powers={:?}, fractions={:?}",
        raw,
        fractions
    );

    BandProfile { fractions }
}
