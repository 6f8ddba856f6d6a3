//! Example: analyze a single recording
//!
//! Decodes the file given on the command line, runs both detection modes,
//! and prints the presence report and timestamps.

use std::path::Path;

use gunshot_dsp::{analyze_recording, detect_onset_events, io::decode_audio, DetectionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: analyze_file <audio-file>")?;

    let (samples, sample_rate) = decode_audio(Path::new(&path))?;

    let report = analyze_recording(&samples, sample_rate, &DetectionConfig::energy())?;
    println!("Recording: {}", path);
    println!(
        "  Duration: {:.1} s at {} Hz",
        report.metadata.duration_seconds, report.metadata.sample_rate
    );
    println!(
        "  Gunshots present: {} (confidence {:.0}%)",
        report.present, report.confidence
    );
    for t in &report.timestamps {
        println!("  energy event at {:.3} s", t);
    }

    let onsets = detect_onset_events(&samples, sample_rate, &DetectionConfig::onset())?;
    for t in &onsets {
        println!("  onset event at {:.3} s", t);
    }

    println!(
        "  Processed in {:.2} ms",
        report.metadata.processing_time_ms
    );

    Ok(())
}
