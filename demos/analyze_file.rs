//! Example: Analyze a recording and print the clinical report
//!
//! Usage: cargo run --example analyze_file -- <path-to-recording>

use std::path::Path;

use cardiospectra::analysis::report::render_report;
use cardiospectra::{analyze_audio, AnalysisConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: analyze_file <path-to-recording>")?;
    let path = Path::new(&path);

    let buffer = cardiospectra::io::decoder::decode_audio(path)?;
    let result = analyze_audio(&buffer, AnalysisConfig::default())?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("recording");
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    print!("{}", render_report(&result, file_name, &generated_at));

    Ok(())
}
