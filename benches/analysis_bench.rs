//! Performance benchmarks for cardiac analysis

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cardiospectra::{analyze_audio, AnalysisConfig, SampleBuffer};

/// Synthetic 72 BPM heartbeat: decaying pulses on a 60 Hz carrier.
fn synthetic_heartbeat(duration_s: f32, sample_rate: u32) -> Vec<f32> {
    let n = (duration_s * sample_rate as f32) as usize;
    let mut samples = vec![0.0f32; n];

    let period = 60.0 / 72.0 * sample_rate as f32;
    let pulse_len = (0.03 * sample_rate as f32) as usize;

    let mut pos = 0.0f32;
    while (pos as usize) < n {
        let start = pos as usize;
        let end = (start + pulse_len).min(n);
        for (i, s) in samples[start..end].iter_mut().enumerate() {
            let t = i as f32 / sample_rate as f32;
            *s = (-t * 80.0).exp() * (2.0 * std::f32::consts::PI * 60.0 * t).sin() * 0.8;
        }
        pos += period;
    }

    samples
}

fn bench_analyze_audio(c: &mut Criterion) {
    // 30 seconds at 44.1 kHz, the recommended recording length
    let buffer = SampleBuffer::from_mono(synthetic_heartbeat(30.0, 44100), 44100).unwrap();

    c.bench_function("analyze_audio_30s", |b| {
        b.iter(|| {
            let _ = analyze_audio(black_box(&buffer), black_box(AnalysisConfig::default()));
        });
    });
}

criterion_group!(benches, bench_analyze_audio);
criterion_main!(benches);
