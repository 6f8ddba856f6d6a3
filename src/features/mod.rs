//! Frame scoring modules
//!
//! Scorers turn a signal into one raw score per frame on a shared frame grid
//! (see [`FrameLayout`](crate::config::FrameLayout)). The detection pipeline
//! is polymorphic over scorers:
//! - Energy (sum of squared magnitudes per frame)
//! - Onset strength (half-wave rectified spectral flux)

pub mod energy;
pub mod onset_strength;

use crate::config::FrameLayout;
use crate::error::DetectionError;

/// A per-frame scoring strategy
///
/// Implementations must score every frame the layout places over the signal
/// (`layout.num_frames(samples.len())` scores, index-aligned with the grid)
/// and treat trailing short frames like full ones: use the remaining samples,
/// never pad or skip.
///
/// Raw scores are unnormalized; the pipeline divides by the signal-wide
/// maximum before thresholding.
pub trait FrameScorer {
    /// Short method name for logging and report metadata
    fn name(&self) -> &'static str;

    /// Compute one raw score per frame
    fn score(&self, samples: &[f32], layout: FrameLayout) -> Result<Vec<f32>, DetectionError>;
}
