//! Temporal deduplication of candidate timestamps
//!
//! A single gunshot lights up several overlapping frames; the candidate list
//! therefore arrives as short bursts of near-identical timestamps. This pass
//! keeps one representative per burst: the earliest.

/// Greedy left-to-right deduplication
///
/// Scans the ascending candidate times once, accepting a time only if it lies
/// strictly more than `min_separation` seconds after the *last accepted* time
/// (not the previous raw candidate). The boundary is exclusive: a candidate
/// exactly `min_separation` after the last accepted one is dropped.
///
/// Inputs are expected to be rounded to 3 decimals already; the comparison
/// runs on the rounded values.
///
/// # Example
///
/// ```
/// use gunshot_dsp::detection::dedupe::dedupe_timestamps;
///
/// let times = vec![1.0, 1.1, 1.2, 2.0];
/// assert_eq!(dedupe_timestamps(&times, 0.3), vec![1.0, 2.0]);
/// ```
pub fn dedupe_timestamps(candidate_times: &[f64], min_separation: f64) -> Vec<f64> {
    let mut accepted = Vec::new();
    let mut last = f64::NEG_INFINITY;

    for &t in candidate_times {
        if t > last + min_separation {
            accepted.push(t);
            last = t;
        }
    }

    accepted
}
