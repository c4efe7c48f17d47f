//! Heart-rate classification and clinical observations
//!
//! Simple threshold rules over an [`AnalysisResult`] producing the tagged
//! observation list shown in the report. Screening heuristics only, not
//! medical advice.

use serde::{Deserialize, Serialize};

use super::result::{AnalysisResult, RhythmClass};

/// Heart-rate range classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartRateClass {
    /// 60-100 BPM
    NormalSinus,
    /// Below 60 BPM
    Bradycardia,
    /// Above 100 BPM
    Tachycardia,
}

impl HeartRateClass {
    /// Display label, e.g. "Normal Sinus"
    pub fn label(&self) -> &'static str {
        match self {
            HeartRateClass::NormalSinus => "Normal Sinus",
            HeartRateClass::Bradycardia => "Bradycardia",
            HeartRateClass::Tachycardia => "Tachycardia",
        }
    }
}

/// Classify a BPM estimate against the normal sinus range.
pub fn classify_heart_rate(bpm: u32) -> HeartRateClass {
    if bpm < 60 {
        HeartRateClass::Bradycardia
    } else if bpm <= 100 {
        HeartRateClass::NormalSinus
    } else {
        HeartRateClass::Tachycardia
    }
}

/// Observation tag controlling how a note is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    /// Finding within normal limits
    Normal,
    /// Finding that warrants clinical review
    Warning,
    /// Ambiguous finding to correlate clinically
    Caution,
    /// Possible recording artifact
    Artifact,
    /// Recording-quality advice
    Hint,
}

/// A single clinical observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalNote {
    /// Presentation tag
    pub kind: NoteKind,
    /// Observation text
    pub text: String,
}

impl ClinicalNote {
    fn new(kind: NoteKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Derive clinical observations from an analysis result.
///
/// Fixed threshold rules; the note texts are part of the report contract.
pub fn clinical_notes(result: &AnalysisResult) -> Vec<ClinicalNote> {
    let mut notes = Vec::new();

    if let Some(bpm) = result.bpm {
        match classify_heart_rate(bpm) {
            HeartRateClass::NormalSinus => notes.push(ClinicalNote::new(
                NoteKind::Normal,
                "Heart rate is within the normal sinus range of 60–100 BPM.",
            )),
            HeartRateClass::Bradycardia => notes.push(ClinicalNote::new(
                NoteKind::Warning,
                "Detected heart rate suggests bradycardia (<60 BPM). This can be normal \
                 in trained athletes but warrants clinical review.",
            )),
            HeartRateClass::Tachycardia => notes.push(ClinicalNote::new(
                NoteKind::Warning,
                "Detected heart rate suggests tachycardia (>100 BPM). May indicate stress, \
                 fever, or cardiac arrhythmia. Clinical evaluation recommended.",
            )),
        }
    }

    match result.rhythm {
        RhythmClass::RegularSinus => notes.push(ClinicalNote::new(
            NoteKind::Normal,
            "Rhythm appears regular with low interval variability — consistent with \
             normal sinus rhythm.",
        )),
        RhythmClass::MildlyIrregular => notes.push(ClinicalNote::new(
            NoteKind::Caution,
            "Mild rhythm irregularity detected. May be respiratory sinus arrhythmia \
             (physiologically normal) or an early arrhythmia. Correlate with clinical findings.",
        )),
        RhythmClass::Irregular => notes.push(ClinicalNote::new(
            NoteKind::Warning,
            "Significant rhythm irregularity detected. Differential includes atrial \
             fibrillation, ectopic beats, or other arrhythmias. Clinical evaluation advised.",
        )),
        RhythmClass::InsufficientData => {}
    }

    if result.dominant_frequency_hz > 200 {
        notes.push(ClinicalNote::new(
            NoteKind::Artifact,
            "High dominant frequency detected. This may indicate background noise or \
             electronic interference in the recording.",
        ));
    }

    if result.duration_seconds < 10.0 {
        notes.push(ClinicalNote::new(
            NoteKind::Hint,
            "Recording duration is short. Longer recordings (>30s) improve BPM detection \
             accuracy significantly.",
        ));
    }

    if result.peak_count < 3 {
        notes.push(ClinicalNote::new(
            NoteKind::Hint,
            "Few cardiac events detected. Ensure the recording microphone was placed close \
             to the chest wall, and the environment was quiet.",
        ));
    }

    notes
}
