//! Configuration parameters for cardiac sound analysis

/// Analysis configuration parameters
///
/// The defaults reproduce the clinical heuristics the engine was tuned with;
/// they are exposed so callers can experiment, but the classification
/// thresholds are part of the output contract and should normally be left
/// alone.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Envelope extraction
    /// Envelope frame duration in seconds (default: 0.025 = 25 ms)
    pub frame_duration_s: f32,

    // Peak detection
    /// Peak threshold as a multiple of the envelope mean (default: 1.5)
    pub threshold_ratio: f32,

    /// Refractory period between accepted peaks in seconds (default: 0.25)
    /// Models the cardiac refractory period: two heart sounds cannot
    /// follow each other faster than this.
    pub refractory_s: f32,

    // Rhythm estimation
    /// Minimum physiologically plausible BPM (default: 30)
    pub min_bpm: u32,

    /// Maximum physiologically plausible BPM (default: 220)
    pub max_bpm: u32,

    /// Interval CV below this is classified as regular sinus (default: 0.08)
    pub cv_regular: f32,

    /// Interval CV below this (and above `cv_regular`) is classified as
    /// mildly irregular; at or above it, irregular (default: 0.20)
    pub cv_irregular: f32,

    // Dominant frequency estimation
    /// Maximum zero-crossing analysis window in seconds (default: 10.0)
    /// Caps the cost of the full-buffer pass on long recordings.
    pub zc_window_s: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_duration_s: 0.025,
            threshold_ratio: 1.5,
            refractory_s: 0.25,
            min_bpm: 30,
            max_bpm: 220,
            cv_regular: 0.08,
            cv_irregular: 0.20,
            zc_window_s: 10.0,
        }
    }
}
