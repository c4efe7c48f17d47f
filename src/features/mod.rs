//! Feature extraction modules
//!
//! This module contains the five signal-processing passes of the pipeline:
//! - Envelope extraction (25 ms RMS frames)
//! - Peak detection (refractory-gated local maxima)
//! - Rhythm estimation (inter-peak interval statistics)
//! - Band-energy profiling (time-domain framing heuristic)
//! - Dominant frequency estimation (zero-crossing rate)

pub mod bands;
pub mod envelope;
pub mod peaks;
pub mod rhythm;
pub mod zero_crossing;
