//! Green Noise Core
//!
//! This crate synthesizes "green" noise (colored noise whose power spectral
//! density falls off as 1/f²) and provides the supporting pieces a front end
//! needs: a canonical mono 16-bit PCM WAV encoder, a magnitude spectrum for
//! plotting, and a cancellable playback controller over the default audio
//! output device.
//!
//! # Synthesis
//!
//! Green noise is produced by integrating white noise: independent
//! standard-normal draws are cumulatively summed, which divides each
//! frequency component's magnitude by its frequency, and the result is
//! scaled so the largest absolute sample sits exactly at 1.0.
//!
//! By default each call draws a fresh seed from process entropy, so two
//! calls with identical parameters produce different buffers. An explicit
//! seed pins the output byte-for-byte; all randomness flows through PCG32.
//!
//! # Example
//!
//! ```ignore
//! use greennoise_core::{generate, GenerationParameters, wav};
//!
//! let params = GenerationParameters::new(44100, 5.0);
//! let buffer = generate(&params)?;
//! let result = wav::encode_to_path(&buffer, "noise.wav".as_ref())?;
//! println!("PCM hash: {}", result.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] / [`generate_seeded()`] - noise synthesis entry points
//! - [`params`] - generation parameters and validation
//! - [`spectrum`] - FFT magnitude data for the spectrum plot
//! - [`wav`] - mono 16-bit PCM WAV writer and shared quantizer
//! - [`device`] - audio output device abstraction (cpal)
//! - [`playback`] - chunked, cancellable playback worker
//! - [`rng`] - PCG32 construction with entropy or explicit seeds

pub mod device;
pub mod error;
pub mod generator;
pub mod params;
pub mod playback;
pub mod rng;
pub mod spectrum;
pub mod wav;

// Re-export main types at crate root
pub use device::{AudioOutput, AudioSink, CpalOutput};
pub use error::{NoiseError, NoiseResult};
pub use generator::{generate, generate_seeded, NoiseBuffer};
pub use params::GenerationParameters;
pub use playback::{CancelToken, PlaybackController, PlaybackStatus};
pub use spectrum::{display_limit_hz, Spectrum};
pub use wav::{WavFormat, WavResult};
