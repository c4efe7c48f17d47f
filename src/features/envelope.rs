//! Energy envelope extraction
//!
//! Chunks the sample array into fixed-duration non-overlapping frames and
//! computes one RMS energy value per frame.
//!
//! Algorithm:
//! 1. Frame size = floor(sample_rate * frame_duration) samples (25 ms default)
//! 2. Per complete frame: RMS = sqrt(mean of squared samples)
//! 3. Trailing partial frame is discarded
//!
//! Invariant: `frames.len() == sample_count / frame_size` (integer division).

/// RMS energy envelope of a recording.
///
/// Frame indices are positions in `frames`; `frame_size` converts them back
/// to sample positions and, with the sample rate, to seconds.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// One RMS value per complete frame, in recording order
    pub frames: Vec<f32>,

    /// Frame length in samples
    pub frame_size: usize,
}

impl Envelope {
    /// Arithmetic mean of the frame energies, `None` for an empty envelope.
    pub fn mean(&self) -> Option<f32> {
        if self.frames.is_empty() {
            return None;
        }
        Some(self.frames.iter().sum::<f32>() / self.frames.len() as f32)
    }

    /// Maximum frame energy, `None` for an empty envelope.
    pub fn max(&self) -> Option<f32> {
        self.frames
            .iter()
            .copied()
            .fold(None, |acc: Option<f32>, v| {
                Some(acc.map_or(v, |m| m.max(v)))
            })
    }
}

/// Compute the RMS energy envelope of a sample array.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `sample_rate` - Sample rate in Hz
/// * `frame_duration_s` - Frame duration in seconds (25 ms default)
///
/// # Returns
///
/// An [`Envelope`]. If the sample array is shorter than one frame the
/// envelope is empty; downstream stages degrade to "no peaks, no BPM"
/// rather than failing.
pub fn compute_envelope(samples: &[f32], sample_rate: u32, frame_duration_s: f32) -> Envelope {
    let frame_size = ((sample_rate as f32 * frame_duration_s) as usize).max(1);

    let frames: Vec<f32> = samples
        .chunks_exact(frame_size)
        .map(|frame| {
            let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
            (sum_sq / frame_size as f32).sqrt()
        })
        .collect();

    log::debug!(
        "Envelope: {} samples -> {} frames of {} samples",
        samples.len(),
        frames.len(),
        frame_size
    );

    Envelope { frames, frame_size }
}
