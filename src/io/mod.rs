//! Audio ingestion
//!
//! Decoding lives outside the detection core: the pipeline only ever sees an
//! in-memory mono signal. Everything that can go wrong here surfaces as
//! [`DetectionError::IngestionFailure`](crate::error::DetectionError).

pub mod decoder;

pub use decoder::decode_audio;
