//! WAV encoding result type and sinks.

use std::io::Write;
use std::path::Path;

use crate::error::NoiseResult;
use crate::generator::NoiseBuffer;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav, write_wav_to_vec};

/// Result of encoding a noise buffer.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a buffer to an in-memory WAV file.
    pub fn from_buffer(buffer: &NoiseBuffer) -> Self {
        let pcm = samples_to_pcm16(buffer.samples());
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(buffer.sample_rate());
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Encodes a buffer and writes the WAV file to `path`.
///
/// Open and write failures surface as [`crate::NoiseError::Io`].
pub fn encode_to_path(buffer: &NoiseBuffer, path: &Path) -> NoiseResult<WavResult> {
    let result = WavResult::from_buffer(buffer);
    std::fs::write(path, &result.wav_data)?;
    Ok(result)
}

/// Encodes a buffer and streams the WAV file into an arbitrary sink.
pub fn encode_to_sink<W: Write>(buffer: &NoiseBuffer, sink: &mut W) -> NoiseResult<()> {
    let pcm = samples_to_pcm16(buffer.samples());
    let format = WavFormat::mono(buffer.sample_rate());
    write_wav(sink, &format, &pcm)?;
    Ok(())
}
