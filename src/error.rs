//! Error types for the detection engine

use std::fmt;

/// Errors that can occur during detection
///
/// Degenerate numeric cases (empty signal, silent signal, zero candidates)
/// are *not* errors; they produce empty results so downstream consumers can
/// always render "no detections" without special-casing.
#[derive(Debug, Clone)]
pub enum DetectionError {
    /// Invalid configuration or input parameters (non-positive sample rate,
    /// non-positive frame duration, frame length rounding below one sample,
    /// threshold outside (0, 1], negative separation). Fatal to the call;
    /// the caller must fix the configuration before retrying.
    InvalidParameter(String),

    /// Failure at the audio ingestion boundary (file open, probe, decode).
    /// The detection core itself never produces this variant; it is raised
    /// by `io::decoder` before a signal reaches the pipeline.
    IngestionFailure(String),
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            DetectionError::IngestionFailure(msg) => write!(f, "Ingestion failure: {}", msg),
        }
    }
}

impl std::error::Error for DetectionError {}
