//! Decoded PCM input contract
//!
//! A [`SampleBuffer`] is the sole input to the analysis engine: per-channel
//! sample arrays in [-1.0, 1.0] plus a sample rate. It is validated once at
//! construction and immutable afterwards, so every downstream pass can assume
//! a well-formed buffer.

use crate::error::AnalysisError;

/// A decoded, immutable PCM buffer.
///
/// Channels are kept separate (no downmixing); the engine reads channel 0
/// only. Construction fast-fails on genuinely invalid input per the engine's
/// error policy; everything else degrades gracefully during analysis.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from per-channel sample arrays.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the sample rate is zero,
    /// there are no channels, any channel is empty, or channel lengths
    /// differ.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self, AnalysisError> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }

        if channels.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "At least one channel is required".to_string(),
            ));
        }

        let len = channels[0].len();
        if len == 0 {
            return Err(AnalysisError::InvalidInput(
                "Empty audio samples".to_string(),
            ));
        }

        if channels.iter().any(|c| c.len() != len) {
            return Err(AnalysisError::InvalidInput(
                "All channels must have the same length".to_string(),
            ));
        }

        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Create a buffer from a single mono channel.
    pub fn from_mono(samples: Vec<f32>, sample_rate: u32) -> Result<Self, AnalysisError> {
        Self::new(vec![samples], sample_rate)
    }

    /// The analysis channel (channel 0).
    pub fn primary(&self) -> &[f32] {
        &self.channels[0]
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Per-channel sample count.
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    /// True if the buffer holds no samples. Construction rejects empty
    /// buffers, so this exists only to satisfy the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.channels[0].is_empty()
    }

    /// Recording duration in seconds.
    pub fn duration_seconds(&self) -> f32 {
        self.len() as f32 / self.sample_rate as f32
    }
}
