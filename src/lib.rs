//! # CardioSpectra
//!
//! A heuristic cardiac-sound analysis engine for chest-microphone recordings,
//! providing heart-rate estimation, rhythm regularity classification,
//! band-energy profiling and dominant-frequency estimation.
//!
//! ## Features
//!
//! - **Heart Rate**: refractory-gated peak picking over a 25 ms RMS envelope
//! - **Rhythm Classification**: interval CV thresholds (regular sinus,
//!   mildly irregular, irregular)
//! - **Band Energy**: four-band time-domain framing heuristic (no FFT)
//! - **Dominant Frequency**: zero-crossing rate over a bounded window
//!
//! ## Quick Start
//!
//! ```
//! use cardiospectra::{analyze_audio, AnalysisConfig, SampleBuffer};
//!
//! // Decoded mono samples, normalized to [-1.0, 1.0]
//! let samples = vec![0.0f32; 44100 * 5];
//! let buffer = SampleBuffer::from_mono(samples, 44100)?;
//!
//! let result = analyze_audio(&buffer, AnalysisConfig::default())?;
//!
//! match result.bpm {
//!     Some(bpm) => println!("Heart rate: {} BPM ({})", bpm, result.rhythm.label()),
//!     None => println!("Insufficient data: {}", result.assessment),
//! }
//! # Ok::<(), cardiospectra::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! One single-pass, stateless pipeline over an immutable buffer:
//!
//! ```text
//! SampleBuffer → Envelope → Peaks → Rhythm ─┐
//! SampleBuffer → Band Profile ──────────────┼→ AnalysisResult
//! SampleBuffer → Zero Crossings ────────────┘
//! ```
//!
//! The engine is a pure function: no I/O, no shared state, no concurrency.
//! Degenerate inputs (silence, buffers shorter than one frame) resolve to
//! sentinel values instead of errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::result::{AnalysisResult, BandProfile, RhythmClass};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use io::sample_buffer::SampleBuffer;

/// Main analysis function
///
/// Runs the full pipeline over channel 0 of the buffer and returns the
/// aggregate result: BPM, rhythm classification, band-energy profile,
/// dominant frequency and envelope statistics.
///
/// # Arguments
///
/// * `buffer` - Validated PCM input (the engine reads channel 0 only)
/// * `config` - Analysis configuration parameters
///
/// # Errors
///
/// Never fails for well-typed input; the `Result` mirrors the construction
/// contract so callers can chain decoding and analysis with `?`. Degenerate
/// buffers produce a result with optional fields unset and
/// [`RhythmClass::InsufficientData`].
///
/// # Example
///
/// ```
/// use cardiospectra::{analyze_audio, AnalysisConfig, SampleBuffer};
///
/// let buffer = SampleBuffer::from_mono(vec![0.0f32; 44100], 44100)?;
/// let result = analyze_audio(&buffer, AnalysisConfig::default())?;
/// assert!(result.bpm.is_none());
/// # Ok::<(), cardiospectra::AnalysisError>(())
/// ```
pub fn analyze_audio(
    buffer: &SampleBuffer,
    config: AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let samples = buffer.primary();
    let sample_rate = buffer.sample_rate();

    log::debug!(
        "Starting cardiac analysis: {} samples at {} Hz ({:.2}s, {} channels)",
        samples.len(),
        sample_rate,
        buffer.duration_seconds(),
        buffer.channel_count()
    );

    // Stage 1: energy envelope (25 ms RMS frames)
    let envelope = features::envelope::compute_envelope(
        samples,
        sample_rate,
        config.frame_duration_s,
    );

    if envelope.frames.is_empty() {
        log::warn!(
            "Recording shorter than one {}s frame, degrading to insufficient data",
            config.frame_duration_s
        );
    }

    // Stage 2: refractory-gated peak detection
    let peaks = features::peaks::detect_peaks(
        &envelope,
        sample_rate,
        config.threshold_ratio,
        config.refractory_s,
    );

    // Stage 3: rhythm estimation and classification
    let stats = features::rhythm::estimate_intervals(
        &peaks,
        envelope.frame_size,
        sample_rate,
        &config,
    );
    let rhythm = features::rhythm::classify_rhythm(stats.as_ref(), &config);

    // Stage 4: band-energy profile (independent pass over the raw buffer)
    let bands = features::bands::band_profile(samples, sample_rate);

    // Stage 5: dominant frequency via zero crossings (independent pass)
    let dominant = features::zero_crossing::dominant_frequency(
        samples,
        sample_rate,
        config.zc_window_s,
    );

    let result = AnalysisResult {
        bpm: stats.map(|s| s.bpm),
        duration_seconds: buffer.duration_seconds(),
        sample_rate,
        channel_count: buffer.channel_count(),
        peak_count: peaks.len(),
        avg_interval: stats.map(|s| s.avg_interval),
        interval_cv: stats.map(|s| s.cv),
        rhythm,
        assessment: rhythm.assessment().to_string(),
        dominant_frequency_hz: dominant.frequency_hz,
        zero_crossings: dominant.zero_crossings,
        bands,
        envelope_max: envelope.max().unwrap_or(0.0),
    };

    log::debug!(
        "Analysis complete: bpm={:?}, rhythm={:?}, {} peaks, dom_freq={} Hz",
        result.bpm,
        result.rhythm,
        result.peak_count,
        result.dominant_frequency_hz
    );

    Ok(result)
}
