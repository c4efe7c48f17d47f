//! Error types for the cardiac analysis engine

use std::fmt;

/// Errors that can occur while building input or decoding audio.
///
/// The analysis pipeline itself never fails on well-typed input: degenerate
/// buffers (silence, too short for one frame) resolve to sentinel values in
/// [`AnalysisResult`](crate::AnalysisResult) instead of errors.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters (zero sample rate, no channels, ...)
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
