//! Plain-text report rendering
//!
//! Renders an [`AnalysisResult`] as the fixed-section clinical-style text
//! report (vitals summary, rhythm detail, clinical observations, disclaimer).
//! The engine stays pure: the caller supplies the file name and a formatted
//! timestamp.

use std::fmt::Write;

use super::assessment::clinical_notes;
use super::result::AnalysisResult;

/// Render a plain-text analysis report.
///
/// # Arguments
///
/// * `result` - The analysis to report on
/// * `file_name` - Display name of the analyzed recording
/// * `generated_at` - Pre-formatted timestamp for the header
pub fn render_report(result: &AnalysisResult, file_name: &str, generated_at: &str) -> String {
    let bpm = result
        .bpm
        .map_or_else(|| "N/A".to_string(), |b| b.to_string());
    let interval = result
        .avg_interval
        .map_or_else(|| "—".to_string(), |i| format!("{:.0} ms", i * 1000.0));
    let cv = result
        .interval_cv
        .map_or_else(|| "—".to_string(), |c| format!("{:.1}%", c * 100.0));

    let mut report = String::new();

    // Writing to a String cannot fail; discard the fmt::Result
    let _ = writeln!(report, "CARDIOSPECTRA — CARDIAC ANALYSIS REPORT");
    let _ = writeln!(report, "=========================================");
    let _ = writeln!(report, "Generated: {}", generated_at);
    let _ = writeln!(report, "File: {}", file_name);
    let _ = writeln!(report);
    let _ = writeln!(report, "VITALS SUMMARY");
    let _ = writeln!(report, "--------------");
    let _ = writeln!(report, "Heart Rate:         {} BPM", bpm);
    let _ = writeln!(report, "Rhythm:             {}", result.rhythm.label());
    let _ = writeln!(
        report,
        "Dominant Frequency: {} Hz",
        result.dominant_frequency_hz
    );
    let _ = writeln!(report, "Events Detected:    {} peaks", result.peak_count);
    let _ = writeln!(report);
    let _ = writeln!(report, "RHYTHM DETAIL");
    let _ = writeln!(report, "-------------");
    let _ = writeln!(report, "Avg Beat Interval:  {}", interval);
    let _ = writeln!(report, "Interval CV:        {}", cv);
    let _ = writeln!(report, "Assessment:         {}", result.assessment);
    let _ = writeln!(report);
    let _ = writeln!(report, "CLINICAL OBSERVATIONS");
    let _ = writeln!(report, "---------------------");
    for note in clinical_notes(result) {
        let _ = writeln!(report, "• {}", note.text);
    }
    let _ = writeln!(report);
    let _ = writeln!(report, "=========================================");
    let _ = writeln!(
        report,
        "DISCLAIMER: This report is generated by signal processing algorithms for educational"
    );
    let _ = writeln!(
        report,
        "and screening purposes only. It does not constitute medical advice. Consult a qualified"
    );
    let _ = writeln!(report, "cardiologist for clinical interpretation.");

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::{BandProfile, RhythmClass};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            bpm: Some(72),
            duration_seconds: 30.0,
            sample_rate: 44100,
            channel_count: 1,
            peak_count: 35,
            avg_interval: Some(0.833),
            interval_cv: Some(0.021),
            rhythm: RhythmClass::RegularSinus,
            assessment: RhythmClass::RegularSinus.assessment().to_string(),
            dominant_frequency_hz: 85,
            zero_crossings: 1700,
            bands: BandProfile {
                fractions: [0.5, 0.3, 0.15, 0.05],
            },
            envelope_max: 0.7,
        }
    }

    #[test]
    fn test_report_sections_present() {
        let report = render_report(&sample_result(), "recording.wav", "2026-01-01 12:00");
        assert!(report.contains("VITALS SUMMARY"));
        assert!(report.contains("RHYTHM DETAIL"));
        assert!(report.contains("CLINICAL OBSERVATIONS"));
        assert!(report.contains("DISCLAIMER"));
        assert!(report.contains("File: recording.wav"));
        assert!(report.contains("Generated: 2026-01-01 12:00"));
    }

    #[test]
    fn test_report_vitals_values() {
        let report = render_report(&sample_result(), "r.wav", "now");
        assert!(report.contains("Heart Rate:         72 BPM"));
        assert!(report.contains("Rhythm:             Regular Sinus"));
        assert!(report.contains("Dominant Frequency: 85 Hz"));
        assert!(report.contains("Events Detected:    35 peaks"));
        assert!(report.contains("Avg Beat Interval:  833 ms"));
        assert!(report.contains("Interval CV:        2.1%"));
    }

    #[test]
    fn test_report_handles_missing_bpm() {
        let mut result = sample_result();
        result.bpm = None;
        result.avg_interval = None;
        result.interval_cv = None;
        result.rhythm = RhythmClass::InsufficientData;
        result.assessment = RhythmClass::InsufficientData.assessment().to_string();

        let report = render_report(&result, "r.wav", "now");
        assert!(report.contains("Heart Rate:         N/A BPM"));
        assert!(report.contains("Avg Beat Interval:  —"));
        assert!(report.contains("Assessment:         Requires more data"));
    }
}
