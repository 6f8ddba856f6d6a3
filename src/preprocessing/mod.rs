//! Signal conditioning ahead of detection
//!
//! - Channel mixing (interleaved/stereo to mono)
//! - Pre-emphasis (first-order high-pass for the onset detection mode)

pub mod channel_mixer;
pub mod preemphasis;
