//! Report metadata

use serde::{Deserialize, Serialize};

/// Metadata attached to a detection report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Recording duration in seconds
    pub duration_seconds: f64,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,

    /// Scoring method used ("energy" or "onset_strength")
    pub method: String,
}
