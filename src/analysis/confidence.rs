//! Presence confidence scoring
//!
//! A recording-level heuristic, not a per-event probability: confidence in
//! the presence verdict grows with the number of independent detections and
//! saturates below certainty.

/// Cap on presence confidence in percent
const MAX_CONFIDENCE: f64 = 95.0;

/// Confidence contributed by each deduplicated detection, in percent
const PER_EVENT_CONFIDENCE: f64 = 10.0;

/// Presence confidence in percent for a given detection count
///
/// `min(95, 10 * n)`: one event is weak evidence, ten or more saturate.
pub fn presence_confidence(num_events: usize) -> f64 {
    (num_events as f64 * PER_EVENT_CONFIDENCE).min(MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_events_no_confidence() {
        assert_eq!(presence_confidence(0), 0.0);
    }

    #[test]
    fn test_scales_with_events() {
        assert_eq!(presence_confidence(1), 10.0);
        assert_eq!(presence_confidence(5), 50.0);
    }

    #[test]
    fn test_caps_at_95() {
        assert_eq!(presence_confidence(10), 95.0);
        assert_eq!(presence_confidence(1000), 95.0);
    }
}
