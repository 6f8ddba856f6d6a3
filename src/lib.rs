//! # Gunshot DSP
//!
//! An audio analysis engine for detecting, timestamping, and characterizing
//! impulsive acoustic events (gunshots) in recordings.
//!
//! ## Features
//!
//! - **Event detection**: overlapping-frame scoring, normalized thresholding,
//!   and greedy temporal deduplication in one reusable pipeline
//! - **Two scoring modes**: raw frame energy and spectral-flux onset strength,
//!   both behind the same [`FrameScorer`](features::FrameScorer) contract
//! - **Recording reports**: presence/confidence summaries for whole files
//! - **Classifier boundary**: detected events can be enriched with firearm
//!   and caliber labels from an injected, opaque classifier
//!
//! ## Quick Start
//!
//! ```
//! use gunshot_dsp::{detect_energy_events, DetectionConfig};
//!
//! // Mono samples, any loudness; thresholds are scale-invariant.
//! let mut samples = vec![0.0f32; 22050 * 2];
//! samples[22050] = 0.9; // impulse at t = 1.0 s
//!
//! let timestamps = detect_energy_events(&samples, 22050, &DetectionConfig::energy())?;
//! assert_eq!(timestamps.len(), 1);
//! # Ok::<(), gunshot_dsp::DetectionError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Signal → Frame Scorer → Normalize → Spike Detector → Deduplicator → Timestamps
//! ```
//!
//! The pipeline is a pure, synchronous computation over a borrowed signal:
//! no shared state and no internal I/O, so independent signals can be
//! analyzed concurrently without coordination. Decoding lives in [`io`];
//! everything downstream of the timestamps (classification, presentation)
//! consumes plain data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod classify;
pub mod config;
pub mod detection;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::analyze_recording;
pub use analysis::result::{AudioInfo, DetectionReport, GunshotEvent};
pub use classify::{locate_events, Classification, Classifier};
pub use config::{DetectionConfig, FrameLayout};
pub use detection::{detect_energy_events, detect_onset_events, detect_timestamps};
pub use error::DetectionError;
