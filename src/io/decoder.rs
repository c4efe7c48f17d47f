//! Audio decoding using Symphonia
//!
//! Decodes a recording (WAV, FLAC, MP3, OGG, AAC) into a [`SampleBuffer`].
//! Channels are de-interleaved and kept separate; the engine analyzes
//! channel 0.

use std::path::Path;

use symphonia::core::audio::SampleBuffer as SymphoniaBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;
use crate::io::sample_buffer::SampleBuffer;

/// Decode an audio file to a [`SampleBuffer`].
///
/// # Arguments
///
/// * `path` - Path to the recording
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be opened,
/// probed, or decoded, and `AnalysisError::InvalidInput` if the decoded
/// stream is empty.
pub fn decode_audio(path: &Path) -> Result<SampleBuffer, AnalysisError> {
    log::debug!("Decoding audio file: {}", path.display());

    let file = std::fs::File::open(path).map_err(|e| {
        AnalysisError::DecodingError(format!("Failed to open {}: {}", path.display(), e))
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
        .map_err(|e| AnalysisError::DecodingError(format!("Failed to probe format: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::DecodingError("No audio tracks found".to_string()))?;

    let track_id = track.id;
    let channel_count = track.codec_params.channels.map_or(1, |c| c.count());
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::DecodingError("Unknown sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::DecodingError(format!("Failed to create decoder: {}", e)))?;

    let mut channels: Vec<Vec<f32>> = vec![Vec::new(); channel_count];

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Packet read failed: {}",
                    e
                )))
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            // Recoverable: skip the corrupt packet and keep decoding
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Decode failed: {}",
                    e
                )))
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();

        let mut sample_buf = SymphoniaBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);

        for frame in sample_buf.samples().chunks(channel_count) {
            for (ch, &sample) in channels.iter_mut().zip(frame.iter()) {
                ch.push(sample);
            }
        }
    }

    log::info!(
        "Decoded audio: {} samples x {} channels at {} Hz ({:.1}s)",
        channels.first().map_or(0, |c| c.len()),
        channel_count,
        sample_rate,
        channels.first().map_or(0, |c| c.len()) as f32 / sample_rate as f32
    );

    SampleBuffer::new(channels, sample_rate)
}
