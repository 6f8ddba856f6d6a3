//! Configuration parameters for event detection

use crate::error::DetectionError;

/// Detection configuration parameters
///
/// There are no hidden defaults inside the algorithms: every call site either
/// supplies a config explicitly or asks for one of the named presets below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    /// Frame duration in seconds (default: 0.05)
    /// Frames overlap by 50%; the hop is half the frame length.
    pub frame_duration: f64,

    /// Detection threshold on normalized frame scores, in (0, 1] (default: 0.6)
    /// Scores are divided by the signal-wide maximum before thresholding, so
    /// the threshold is scale-invariant across recordings of different loudness.
    pub energy_threshold: f32,

    /// Minimum separation between accepted events in seconds (default: 0.3)
    /// Candidates within this distance of the last accepted event are merged
    /// into it. The boundary is exclusive: exactly `min_separation` apart is
    /// still merged.
    pub min_separation: f64,
}

impl DetectionConfig {
    /// Preset for the raw-energy detector
    pub fn energy() -> Self {
        Self {
            frame_duration: 0.05,
            energy_threshold: 0.6,
            min_separation: 0.3,
        }
    }

    /// Preset for the onset-strength (spectral flux) detector
    ///
    /// Same framing as the energy preset, but a wider separation window:
    /// spectral flux tends to fire on both the muzzle blast and the first
    /// strong reflection.
    pub fn onset() -> Self {
        Self {
            min_separation: 0.5,
            ..Self::energy()
        }
    }

    /// Validate this config against a sample rate and compute the frame layout
    ///
    /// Fails fast with `InvalidParameter` before the pipeline allocates
    /// anything. Checks: positive sample rate, positive finite frame duration,
    /// threshold in (0, 1], non-negative finite separation, frame length of at
    /// least one sample, and a non-zero hop.
    pub fn frame_layout(&self, sample_rate: u32) -> Result<FrameLayout, DetectionError> {
        if sample_rate == 0 {
            return Err(DetectionError::InvalidParameter(
                "Sample rate must be > 0".to_string(),
            ));
        }

        if !self.frame_duration.is_finite() || self.frame_duration <= 0.0 {
            return Err(DetectionError::InvalidParameter(format!(
                "Frame duration must be > 0 seconds, got {}",
                self.frame_duration
            )));
        }

        if !self.energy_threshold.is_finite()
            || self.energy_threshold <= 0.0
            || self.energy_threshold > 1.0
        {
            return Err(DetectionError::InvalidParameter(format!(
                "Energy threshold must be in (0, 1], got {}",
                self.energy_threshold
            )));
        }

        if !self.min_separation.is_finite() || self.min_separation < 0.0 {
            return Err(DetectionError::InvalidParameter(format!(
                "Minimum separation must be >= 0 seconds, got {}",
                self.min_separation
            )));
        }

        let frame_length = (self.frame_duration * sample_rate as f64).round() as usize;
        if frame_length < 1 {
            return Err(DetectionError::InvalidParameter(format!(
                "Frame duration {} s rounds to zero samples at {} Hz",
                self.frame_duration, sample_rate
            )));
        }

        let hop_length = frame_length / 2;
        if hop_length == 0 {
            return Err(DetectionError::InvalidParameter(format!(
                "Frame length {} gives a zero hop; use a longer frame duration",
                frame_length
            )));
        }

        Ok(FrameLayout {
            frame_length,
            hop_length,
        })
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self::energy()
    }
}

/// Frame grid shared by all scorers
///
/// Frames start at every `hop_length` samples from 0 through the end of the
/// signal; trailing frames may be shorter than `frame_length` (the remaining
/// samples are used as-is, never padded or skipped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Frame length in samples (>= 1)
    pub frame_length: usize,
    /// Hop between frame starts in samples (half the frame length, >= 1)
    pub hop_length: usize,
}

impl FrameLayout {
    /// Number of frames the grid places over a signal of `num_samples`
    ///
    /// One frame per hop position strictly inside the signal, i.e.
    /// `ceil(num_samples / hop_length)`.
    pub fn num_frames(&self, num_samples: usize) -> usize {
        num_samples.div_ceil(self.hop_length)
    }

    /// Convert a frame index to its timestamp in seconds, rounded to 3 decimals
    pub fn frame_time(&self, frame_index: usize, sample_rate: u32) -> f64 {
        let t = (frame_index * self.hop_length) as f64 / sample_rate as f64;
        round_millis(t)
    }
}

/// Round a time in seconds to 3 decimal places
///
/// Rounding happens *before* deduplication; consumers see millisecond
/// granularity and the dedup comparison operates on the rounded values.
pub(crate) fn round_millis(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_preset() {
        let config = DetectionConfig::energy();
        assert_eq!(config.frame_duration, 0.05);
        assert_eq!(config.energy_threshold, 0.6);
        assert_eq!(config.min_separation, 0.3);
    }

    #[test]
    fn test_frame_layout_50_percent_overlap() {
        let layout = DetectionConfig::energy().frame_layout(22050).unwrap();
        // 0.05 s at 22050 Hz = 1102.5 -> rounds to 1103 samples, hop 551
        assert_eq!(layout.frame_length, 1103);
        assert_eq!(layout.hop_length, 551);
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let result = DetectionConfig::energy().frame_layout(0);
        assert!(matches!(result, Err(DetectionError::InvalidParameter(_))));
    }

    #[test]
    fn test_non_positive_frame_duration_rejected() {
        let mut config = DetectionConfig::energy();
        config.frame_duration = 0.0;
        assert!(config.frame_layout(44100).is_err());
        config.frame_duration = -0.05;
        assert!(config.frame_layout(44100).is_err());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut config = DetectionConfig::energy();
        config.energy_threshold = 0.0;
        assert!(config.frame_layout(44100).is_err());
        config.energy_threshold = 1.5;
        assert!(config.frame_layout(44100).is_err());
        config.energy_threshold = 1.0;
        assert!(config.frame_layout(44100).is_ok());
    }

    #[test]
    fn test_negative_separation_rejected() {
        let mut config = DetectionConfig::energy();
        config.min_separation = -0.1;
        assert!(config.frame_layout(44100).is_err());
        config.min_separation = 0.0;
        assert!(config.frame_layout(44100).is_ok());
    }

    #[test]
    fn test_single_sample_frame_has_zero_hop() {
        // 1 sample frame -> hop 0, which can never advance the grid
        let mut config = DetectionConfig::energy();
        config.frame_duration = 0.001;
        let result = config.frame_layout(1000); // frame_length = 1
        assert!(matches!(result, Err(DetectionError::InvalidParameter(_))));
    }

    #[test]
    fn test_num_frames_covers_tail() {
        let layout = FrameLayout {
            frame_length: 1000,
            hop_length: 500,
        };
        // Frame starts at 0, 500, 1000, ..., every hop position < num_samples
        assert_eq!(layout.num_frames(2000), 4);
        assert_eq!(layout.num_frames(2001), 5);
        assert_eq!(layout.num_frames(499), 1);
        assert_eq!(layout.num_frames(0), 0);
    }

    #[test]
    fn test_frame_time_rounding() {
        let layout = FrameLayout {
            frame_length: 1103,
            hop_length: 551,
        };
        // 40 * 551 / 22050 = 0.99954... -> 1.000 after rounding
        assert_eq!(layout.frame_time(40, 22050), 1.0);
        assert_eq!(layout.frame_time(0, 22050), 0.0);
    }
}
