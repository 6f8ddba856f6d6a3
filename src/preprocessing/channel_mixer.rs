//! Channel mixing utilities (multi-channel to mono conversion)
//!
//! The detection pipeline consumes mono signals; decoded audio arrives either
//! as separate channel buffers or interleaved. Both mixdowns average across
//! channels.

/// Convert split stereo channels to mono by averaging
///
/// Channels of unequal length are averaged over their common prefix; the
/// longer tail is dropped.
pub fn stereo_to_mono(left: &[f32], right: &[f32]) -> Vec<f32> {
    left.iter()
        .zip(right.iter())
        .map(|(&l, &r)| (l + r) * 0.5)
        .collect()
}

/// Convert interleaved multi-channel samples to mono by averaging each frame
///
/// A trailing partial frame (fewer samples than `channels`) is averaged over
/// the samples present. `channels == 0` yields an empty vector.
pub fn interleaved_to_mono(samples: &[f32], channels: usize) -> Vec<f32> {
    if channels == 0 {
        return Vec::new();
    }
    if channels == 1 {
        return samples.to_vec();
    }
    samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_to_mono_averages() {
        let left = vec![1.0, 0.0, -1.0];
        let right = vec![0.0, 0.0, 1.0];
        assert_eq!(stereo_to_mono(&left, &right), vec![0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_stereo_to_mono_truncates_to_shorter_channel() {
        let left = vec![1.0, 1.0, 1.0];
        let right = vec![1.0];
        assert_eq!(stereo_to_mono(&left, &right), vec![1.0]);
    }

    #[test]
    fn test_interleaved_mono_passthrough() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(interleaved_to_mono(&samples, 1), samples);
    }

    #[test]
    fn test_interleaved_stereo() {
        let samples = vec![1.0, 0.0, 0.5, 0.5];
        assert_eq!(interleaved_to_mono(&samples, 2), vec![0.5, 0.5]);
    }

    #[test]
    fn test_interleaved_zero_channels() {
        assert!(interleaved_to_mono(&[1.0, 2.0], 0).is_empty());
    }
}
