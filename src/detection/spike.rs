//! Threshold-based spike detection over normalized frame scores

/// Find frames whose normalized score exceeds the threshold
///
/// The inequality is strict: a score exactly equal to the threshold is not a
/// candidate. Indices come back ascending. An empty score sequence, or one
/// with nothing above the threshold, yields an empty vector; neither is an
/// error.
///
/// # Example
///
/// ```
/// use gunshot_dsp::detection::spike::detect_candidates;
///
/// let scores = vec![0.1, 0.9, 0.6, 0.61];
/// assert_eq!(detect_candidates(&scores, 0.6), vec![1, 3]);
/// ```
pub fn detect_candidates(scores: &[f32], threshold: f32) -> Vec<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, &s)| s > threshold)
        .map(|(i, _)| i)
        .collect()
}
