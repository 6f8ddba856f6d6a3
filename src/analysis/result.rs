//! Detection result types
//!
//! Plain data handed across the presentation boundary; no UI objects, no
//! rendering concerns. Everything is serde-serializable so callers can ship
//! results to a timeline widget, a tabular report, or a JSON API unchanged.

use serde::{Deserialize, Serialize};

use crate::analysis::metadata::ReportMetadata;

/// One detected and (optionally) classified gunshot event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunshotEvent {
    /// Event time in seconds from the start of the recording, 3 decimals
    pub time_seconds: f64,

    /// Detection confidence in [0, 1]
    pub confidence: f64,

    /// Firearm label from the classifier, if one ran
    pub firearm: Option<String>,

    /// Caliber label from the classifier, if one ran
    pub caliber: Option<String>,

    /// Classifier match confidence in [0, 1], if one ran
    pub match_confidence: Option<f64>,
}

impl GunshotEvent {
    /// An unclassified event at the given timestamp
    pub fn at(time_seconds: f64, confidence: f64) -> Self {
        Self {
            time_seconds,
            confidence,
            firearm: None,
            caliber: None,
            match_confidence: None,
        }
    }
}

/// Presence/confidence summary for a whole recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Whether any event was detected
    pub present: bool,

    /// Presence confidence in percent, scaled with the number of detections
    /// and capped at 95
    pub confidence: f64,

    /// Deduplicated event timestamps in seconds, ascending
    pub timestamps: Vec<f64>,

    /// Run metadata (duration, sample rate, timing, method)
    pub metadata: ReportMetadata,
}

/// Basic audio metadata for a loaded signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioInfo {
    /// Duration in seconds
    pub duration_seconds: f64,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioInfo {
    /// Compute info for an in-memory signal
    pub fn of(samples: &[f32], sample_rate: u32) -> Self {
        let duration_seconds = if sample_rate == 0 {
            0.0
        } else {
            samples.len() as f64 / sample_rate as f64
        };
        Self {
            duration_seconds,
            sample_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclassified_event() {
        let event = GunshotEvent::at(1.25, 0.95);
        assert_eq!(event.time_seconds, 1.25);
        assert!(event.firearm.is_none());
        assert!(event.match_confidence.is_none());
    }

    #[test]
    fn test_audio_info() {
        let samples = vec![0.0f32; 44100 * 3];
        let info = AudioInfo::of(&samples, 44100);
        assert_eq!(info.duration_seconds, 3.0);
        assert_eq!(info.sample_rate, 44100);
    }

    #[test]
    fn test_event_serializes_round_trip() {
        let event = GunshotEvent {
            time_seconds: 2.5,
            confidence: 0.95,
            firearm: Some("Glock 17".to_string()),
            caliber: Some("9mm".to_string()),
            match_confidence: Some(0.789),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GunshotEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
