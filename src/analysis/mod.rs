//! Analysis aggregation and consumer-facing modules
//!
//! Combines the feature extraction results into the final analysis:
//! - Result types
//! - Heart-rate classification and clinical observations
//! - Plain-text report rendering
//! - Waveform display summarization

pub mod assessment;
pub mod report;
pub mod result;
pub mod waveform;
