//! Audio decoding using Symphonia
//!
//! Decodes WAV/MP3/M4A (and whatever else Symphonia's probe recognizes) to a
//! mono f32 signal at the file's native sample rate. No resampling happens
//! here; the detection pipeline is rate-agnostic.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::DetectionError;
use crate::preprocessing::channel_mixer::interleaved_to_mono;

/// Decode a media file to mono PCM samples
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// Tuple of (mono samples, sample rate in Hz)
///
/// # Errors
///
/// `IngestionFailure` for any open, probe, or decode failure. A file that
/// decodes to zero samples is returned as-is; the pipeline treats an empty
/// signal as "no detections", not an error.
pub fn decode_audio(path: &Path) -> Result<(Vec<f32>, u32), DetectionError> {
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path).map_err(|e| {
        DetectionError::IngestionFailure(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| DetectionError::IngestionFailure(format!("Failed to probe format: {}", e)))?;

    let mut format = probed.format;
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            DetectionError::IngestionFailure("No decodable audio track found".to_string())
        })?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.ok_or_else(|| {
        DetectionError::IngestionFailure("Track does not declare a sample rate".to_string())
    })?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| {
            DetectionError::IngestionFailure(format!("Failed to create decoder: {}", e))
        })?;

    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::ResetRequired) => continue,
            // End of stream and truncated tails both terminate decoding.
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                let duration = decoded.capacity() as u64;
                if duration == 0 {
                    continue;
                }

                let mut buf = SampleBuffer::<f32>::new(duration, spec);
                buf.copy_interleaved_ref(decoded);
                samples.extend(interleaved_to_mono(buf.samples(), spec.channels.count()));
            }
            Err(SymphoniaError::DecodeError(e)) => {
                // Recoverable per-packet corruption; skip and keep going.
                log::warn!("Skipping undecodable packet: {}", e);
                continue;
            }
            Err(SymphoniaError::ResetRequired) => continue,
            Err(e) => {
                return Err(DetectionError::IngestionFailure(format!(
                    "Decode error: {}",
                    e
                )));
            }
        }
    }

    log::debug!(
        "Decoded {} mono samples at {} Hz",
        samples.len(),
        sample_rate
    );

    Ok((samples, sample_rate))
}
