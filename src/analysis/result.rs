//! Analysis result types

use serde::{Deserialize, Serialize};

/// Rhythm regularity classification
///
/// A pure function of the interval coefficient of variation; recomputed per
/// analysis, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RhythmClass {
    /// Interval CV below 0.08
    RegularSinus,
    /// Interval CV in [0.08, 0.20)
    MildlyIrregular,
    /// Interval CV at or above 0.20
    Irregular,
    /// Fewer than two detected events
    InsufficientData,
}

impl RhythmClass {
    /// Display label, e.g. "Regular Sinus"
    pub fn label(&self) -> &'static str {
        match self {
            RhythmClass::RegularSinus => "Regular Sinus",
            RhythmClass::MildlyIrregular => "Mildly Irregular",
            RhythmClass::Irregular => "Irregular",
            RhythmClass::InsufficientData => "Insufficient data",
        }
    }

    /// Human assessment string for the report
    pub fn assessment(&self) -> &'static str {
        match self {
            RhythmClass::RegularSinus => "Normal cardiac rhythm",
            RhythmClass::MildlyIrregular => "Slight irregularity detected",
            RhythmClass::Irregular => "Significant irregularity — consult clinician",
            RhythmClass::InsufficientData => "Requires more data",
        }
    }
}

/// Normalized energy distribution over the four fixed frequency bands
/// (5–50, 50–150, 150–300, 300–1000 Hz).
///
/// Each fraction is in [0, 1]; they sum to 1.0, or are all exactly zero for
/// a silent recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandProfile {
    /// Band fractions in band order (lows first)
    pub fractions: [f32; 4],
}

/// Complete analysis result
///
/// The sole contract surfaced to UI and report consumers. Created once per
/// analysis run and immutable afterwards; running the engine twice on the
/// same buffer yields an identical result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Estimated heart rate in BPM, clamped to [30, 220].
    /// `None` when fewer than two events were detected.
    pub bpm: Option<u32>,

    /// Recording duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of channels in the source buffer (channel 0 was analyzed)
    pub channel_count: usize,

    /// Number of accepted cardiac events
    pub peak_count: usize,

    /// Average inter-event interval in seconds
    pub avg_interval: Option<f32>,

    /// Coefficient of variation of the inter-event intervals
    pub interval_cv: Option<f32>,

    /// Rhythm regularity classification
    pub rhythm: RhythmClass,

    /// Human assessment string matching the rhythm class
    pub assessment: String,

    /// Dominant frequency estimate in Hz (zero-crossing heuristic)
    pub dominant_frequency_hz: u32,

    /// Raw zero-crossing count over the bounded analysis window
    pub zero_crossings: usize,

    /// Normalized band-energy profile
    pub bands: BandProfile,

    /// Maximum envelope RMS value (0 for an empty envelope)
    pub envelope_max: f32,
}
