//! Mono 16-bit PCM WAV writer.
//!
//! Writes canonical RIFF/WAVE output with no timestamps or variable
//! metadata, so encoding the same buffer twice is byte-identical. The
//! quantizer here is the only f64-to-i16 conversion in the crate; the
//! playback path reuses it.

mod format;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::WavFormat;
pub use result::{encode_to_path, encode_to_sink, WavResult};
pub use writer::{quantize, samples_to_pcm16, write_wav, write_wav_to_vec};
