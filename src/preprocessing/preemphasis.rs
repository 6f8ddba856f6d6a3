//! Pre-emphasis filtering
//!
//! First-order high-pass applied before onset-strength scoring. Gunshot
//! transients carry most of their energy in the upper band; pre-emphasis
//! keeps low-frequency rumble (wind, handling noise, traffic) from dominating
//! the frame spectra.

/// Pre-emphasis coefficient (standard speech/transient value)
pub const PRE_EMPHASIS_COEF: f32 = 0.97;

/// Apply pre-emphasis: `y[n] = x[n] - 0.97 * x[n-1]`, `y[0] = x[0]`
pub fn preemphasis(samples: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(samples.len());
    let mut prev = 0.0f32;
    for &x in samples {
        out.push(x - PRE_EMPHASIS_COEF * prev);
        prev = x;
    }
    out
}
