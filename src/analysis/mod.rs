//! Recording-level analysis built on the detection pipeline
//!
//! - Presence/confidence reports
//! - Result and metadata types

pub mod confidence;
pub mod metadata;
pub mod result;

use std::time::Instant;

use crate::config::DetectionConfig;
use crate::detection::detect_energy_events;
use crate::error::DetectionError;
use crate::features::energy::EnergyScorer;
use crate::features::FrameScorer;

use confidence::presence_confidence;
use metadata::ReportMetadata;
use result::{AudioInfo, DetectionReport};

/// Analyze a recording for gunshot presence
///
/// Runs the energy detection pipeline and summarizes the result: whether any
/// event was found, a capped presence confidence, the deduplicated
/// timestamps, and run metadata.
///
/// # Errors
///
/// `InvalidParameter` if the sample rate or config is invalid; empty and
/// silent recordings produce a "not present" report, not an error.
pub fn analyze_recording(
    samples: &[f32],
    sample_rate: u32,
    config: &DetectionConfig,
) -> Result<DetectionReport, DetectionError> {
    let start = Instant::now();

    let timestamps = detect_energy_events(samples, sample_rate, config)?;
    let info = AudioInfo::of(samples, sample_rate);

    log::info!(
        "Analyzed {:.1}s recording: {} events",
        info.duration_seconds,
        timestamps.len()
    );

    Ok(DetectionReport {
        present: !timestamps.is_empty(),
        confidence: presence_confidence(timestamps.len()),
        timestamps,
        metadata: ReportMetadata {
            duration_seconds: info.duration_seconds,
            sample_rate,
            processing_time_ms: start.elapsed().as_secs_f32() * 1000.0,
            method: EnergyScorer.name().to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_recording_not_present() {
        let samples = vec![0.0f32; 22050];
        let report = analyze_recording(&samples, 22050, &DetectionConfig::energy()).unwrap();
        assert!(!report.present);
        assert_eq!(report.confidence, 0.0);
        assert!(report.timestamps.is_empty());
        assert_eq!(report.metadata.duration_seconds, 1.0);
    }

    #[test]
    fn test_impulses_reported_present() {
        let mut samples = vec![0.0f32; 22050 * 3];
        samples[22050] = 1.0;
        samples[44100] = 1.0;
        let report = analyze_recording(&samples, 22050, &DetectionConfig::energy()).unwrap();
        assert!(report.present);
        assert_eq!(report.timestamps.len(), 2);
        assert_eq!(report.confidence, 20.0);
        assert_eq!(report.metadata.method, "energy");
    }

    #[test]
    fn test_invalid_config_propagates() {
        let samples = vec![0.5f32; 1000];
        let config = DetectionConfig {
            frame_duration: -1.0,
            ..DetectionConfig::energy()
        };
        assert!(analyze_recording(&samples, 22050, &config).is_err());
    }
}
