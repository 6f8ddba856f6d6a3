//! Detection pipeline
//!
//! Composes frame scoring, spike detection, and temporal deduplication into a
//! single `detect` call. Every detection mode in the crate (raw energy,
//! onset strength) goes through this one pipeline with a different scorer and
//! config; there is no duplicated threshold or dedup logic per mode.
//!
//! The pipeline is a pure, synchronous computation over the borrowed signal:
//! no shared state, no I/O, no suspension points. It is safe to call
//! concurrently on independent signals.

pub mod dedupe;
pub mod spike;

use crate::config::DetectionConfig;
use crate::error::DetectionError;
use crate::features::energy::EnergyScorer;
use crate::features::onset_strength::OnsetStrengthScorer;
use crate::features::FrameScorer;
use crate::preprocessing::preemphasis::preemphasis;

/// Numerical floor below which a maximum score counts as silence
const EPSILON: f32 = 1e-10;

/// Detect event timestamps with an explicit scorer
///
/// Steps, in order: validate config (fail fast, before any allocation), score
/// frames, normalize by the maximum raw score, threshold into candidates, map
/// frame indices to timestamps rounded to 3 decimals, deduplicate.
///
/// # Arguments
///
/// * `samples` - Mono signal, borrowed read-only
/// * `sample_rate` - Sample rate in Hz (must be > 0)
/// * `config` - Frame duration, threshold, and separation parameters
/// * `scorer` - Per-frame scoring strategy
///
/// # Returns
///
/// Strictly ascending timestamps in seconds, rounded to 3 decimals, pairwise
/// separated by more than `config.min_separation`. Empty and silent signals
/// return an empty vector, not an error.
///
/// # Errors
///
/// `InvalidParameter` for a zero sample rate or an invalid config.
pub fn detect_timestamps(
    samples: &[f32],
    sample_rate: u32,
    config: &DetectionConfig,
    scorer: &dyn FrameScorer,
) -> Result<Vec<f64>, DetectionError> {
    let layout = config.frame_layout(sample_rate)?;

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    log::debug!(
        "Detecting events: {} samples at {} Hz, scorer={}, frame={}, hop={}, threshold={:.2}, separation={:.3}s",
        samples.len(),
        sample_rate,
        scorer.name(),
        layout.frame_length,
        layout.hop_length,
        config.energy_threshold,
        config.min_separation
    );

    let mut scores = scorer.score(samples, layout)?;

    // Normalize by the signal-wide maximum so the threshold is loudness
    // invariant. A silent signal has no maximum to normalize by; its scores
    // stay zero and nothing can cross the threshold.
    let max_score = scores.iter().cloned().fold(0.0f32, f32::max);
    if max_score <= EPSILON {
        log::debug!("Maximum frame score is zero, no events");
        return Ok(Vec::new());
    }
    for s in &mut scores {
        *s /= max_score;
    }

    let candidates = spike::detect_candidates(&scores, config.energy_threshold);

    // Round before deduplication: consumers see millisecond granularity and
    // the separation comparison must run on the rounded values.
    let candidate_times: Vec<f64> = candidates
        .iter()
        .map(|&i| layout.frame_time(i, sample_rate))
        .collect();

    let timestamps = dedupe::dedupe_timestamps(&candidate_times, config.min_separation);

    log::debug!(
        "{} frames -> {} candidates -> {} events",
        scores.len(),
        candidates.len(),
        timestamps.len()
    );

    Ok(timestamps)
}

/// Detect events with the raw-energy scorer
///
/// The basic detection mode: frame energy spikes against a normalized
/// threshold. See [`detect_timestamps`] for the contract.
pub fn detect_energy_events(
    samples: &[f32],
    sample_rate: u32,
    config: &DetectionConfig,
) -> Result<Vec<f64>, DetectionError> {
    detect_timestamps(samples, sample_rate, config, &EnergyScorer)
}

/// Detect events with the onset-strength scorer
///
/// Applies a pre-emphasis filter first (impulsive events live in the high
/// band; pre-emphasis suppresses rumble that would otherwise dominate the
/// spectra), then runs the shared pipeline with spectral flux scoring.
pub fn detect_onset_events(
    samples: &[f32],
    sample_rate: u32,
    config: &DetectionConfig,
) -> Result<Vec<f64>, DetectionError> {
    let emphasized = preemphasis(samples);
    detect_timestamps(&emphasized, sample_rate, config, &OnsetStrengthScorer)
}
