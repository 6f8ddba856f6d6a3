//! Frame energy scoring
//!
//! The raw score of a frame is the sum of squared sample magnitudes. Fast,
//! and effective for impulsive events that dominate the local energy, which
//! is exactly the gunshot profile: a muzzle blast is tens of dB above the
//! ambient floor for a few milliseconds.

use crate::config::FrameLayout;
use crate::error::DetectionError;
use crate::features::FrameScorer;

/// Sum-of-squares energy scorer
///
/// # Example
///
/// ```
/// use gunshot_dsp::config::FrameLayout;
/// use gunshot_dsp::features::{energy::EnergyScorer, FrameScorer};
///
/// let samples = vec![0.0, 1.0, 0.0, 0.5];
/// let layout = FrameLayout { frame_length: 2, hop_length: 1 };
/// let scores = EnergyScorer.score(&samples, layout)?;
/// assert_eq!(scores, vec![1.0, 1.0, 0.25, 0.25]);
/// # Ok::<(), gunshot_dsp::DetectionError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyScorer;

impl FrameScorer for EnergyScorer {
    fn name(&self) -> &'static str {
        "energy"
    }

    fn score(&self, samples: &[f32], layout: FrameLayout) -> Result<Vec<f32>, DetectionError> {
        let num_frames = layout.num_frames(samples.len());
        let mut scores = Vec::with_capacity(num_frames);

        for start in (0..samples.len()).step_by(layout.hop_length) {
            let end = (start + layout.frame_length).min(samples.len());
            let sum_sq: f32 = samples[start..end].iter().map(|&x| x * x).sum();
            scores.push(sum_sq);
        }

        debug_assert_eq!(scores.len(), num_frames);
        Ok(scores)
    }
}
