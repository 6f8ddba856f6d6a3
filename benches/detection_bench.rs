//! Performance benchmarks for event detection

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gunshot_dsp::{detect_energy_events, detect_onset_events, DetectionConfig};

/// Synthetic 30-second recording with an impulse every 2 seconds over a
/// low-level tone bed
fn synthetic_recording(sample_rate: u32) -> Vec<f32> {
    let mut samples: Vec<f32> = (0..sample_rate as usize * 30)
        .map(|i| (i as f32 * 180.0 * 2.0 * std::f32::consts::PI / sample_rate as f32).sin() * 0.01)
        .collect();
    for shot in (2..30).step_by(2) {
        samples[shot * sample_rate as usize] = 1.0;
    }
    samples
}

fn bench_detect_energy(c: &mut Criterion) {
    let samples = synthetic_recording(44100);
    let config = DetectionConfig::energy();

    c.bench_function("detect_energy_30s", |b| {
        b.iter(|| {
            let _ = detect_energy_events(black_box(&samples), black_box(44100), black_box(&config));
        });
    });
}

fn bench_detect_onset(c: &mut Criterion) {
    let samples = synthetic_recording(44100);
    let config = DetectionConfig::onset();

    c.bench_function("detect_onset_30s", |b| {
        b.iter(|| {
            let _ = detect_onset_events(black_box(&samples), black_box(44100), black_box(&config));
        });
    });
}

criterion_group!(benches, bench_detect_energy, bench_detect_onset);
criterion_main!(benches);
