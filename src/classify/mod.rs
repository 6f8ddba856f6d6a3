//! Classifier boundary
//!
//! Firearm/caliber identification is an opaque external capability: the crate
//! defines the call contract and hands each detected event a short clip of
//! surrounding audio. The model itself (how it is loaded, what it runs on)
//! belongs to the caller, which constructs a [`Classifier`] once and passes
//! it in wherever predictions are needed. No global model state.

use serde::{Deserialize, Serialize};

use crate::analysis::result::GunshotEvent;
use crate::config::DetectionConfig;
use crate::detection::detect_energy_events;
use crate::error::DetectionError;

/// Half-width of the clip handed to the classifier, in seconds
pub const CLIP_HALF_WIDTH_SECS: f64 = 0.5;

/// Detection confidence assigned to energy-spike events
///
/// Spikes that survive normalization, thresholding, and deduplication are
/// near-certain impulsive events; what they *are* is the classifier's call.
const SPIKE_CONFIDENCE: f64 = 0.95;

/// One classifier verdict for a single clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Firearm label (e.g. "Glock 17")
    pub firearm: String,

    /// Caliber label (e.g. "9mm")
    pub caliber: String,

    /// Match confidence in [0, 1]
    pub confidence: f64,
}

/// An opaque firearm classifier
///
/// Implementations receive a mono clip centered on a detected event and the
/// clip's sample rate. Feature extraction, model format, and inference are
/// entirely the implementation's business.
pub trait Classifier {
    /// Classify one event clip
    fn classify(
        &self,
        clip: &[f32],
        sample_rate: u32,
    ) -> Result<Classification, DetectionError>;
}

/// Slice the clip surrounding an event timestamp
///
/// Returns the samples within `half_width_secs` of `time_seconds`, clamped to
/// the signal bounds; events near either edge get a shorter clip rather than
/// padding.
pub fn clip_around(
    samples: &[f32],
    sample_rate: u32,
    time_seconds: f64,
    half_width_secs: f64,
) -> &[f32] {
    let center = (time_seconds * sample_rate as f64).round() as i64;
    let half = (half_width_secs * sample_rate as f64).round() as i64;
    let start = (center - half).max(0) as usize;
    let end = ((center + half) as usize).min(samples.len());
    if start >= end {
        &[]
    } else {
        &samples[start..end]
    }
}

/// Detect events and classify each one
///
/// Runs the energy detection pipeline, slices a ±0.5 s clip per timestamp,
/// and asks the injected classifier for a verdict. A per-clip classifier
/// failure downgrades that event to unclassified rather than aborting the
/// whole run; the timeline should still show the detection.
///
/// # Errors
///
/// `InvalidParameter` from the detection pipeline only.
pub fn locate_events(
    samples: &[f32],
    sample_rate: u32,
    config: &DetectionConfig,
    classifier: &dyn Classifier,
) -> Result<Vec<GunshotEvent>, DetectionError> {
    let timestamps = detect_energy_events(samples, sample_rate, config)?;

    let mut events = Vec::with_capacity(timestamps.len());
    for &t in &timestamps {
        let clip = clip_around(samples, sample_rate, t, CLIP_HALF_WIDTH_SECS);
        let mut event = GunshotEvent::at(t, SPIKE_CONFIDENCE);

        match classifier.classify(clip, sample_rate) {
            Ok(classification) => {
                event.firearm = Some(classification.firearm);
                event.caliber = Some(classification.caliber);
                event.match_confidence = Some(classification.confidence);
            }
            Err(e) => {
                log::warn!("Classification failed for event at {:.3}s: {}", t, e);
            }
        }

        events.push(event);
    }

    log::info!("Located and classified {} events", events.len());
    Ok(events)
}
