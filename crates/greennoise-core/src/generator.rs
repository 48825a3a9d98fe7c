//! Green noise synthesis.
//!
//! Green noise is produced by integrating white noise: N independent
//! standard-normal draws are cumulatively summed in index order, which
//! divides each frequency component's magnitude by its frequency and yields
//! the 1/f² spectral tilt. The raw walk is then scaled so the largest
//! absolute sample sits exactly at 1.0.

use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg32;

use crate::error::{NoiseError, NoiseResult};
use crate::params::GenerationParameters;
use crate::rng::{create_rng, entropy_seed};
use crate::wav;

/// A generated, normalized noise buffer.
///
/// Samples are in [-1.0, 1.0] with at least one sample at the peak. The
/// buffer is immutable once produced; each generation request yields a
/// fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl NoiseBuffer {
    /// The normalized samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Time axis in seconds, one entry per sample, for waveform plotting.
    pub fn time_axis(&self) -> Vec<f64> {
        let step = 1.0 / self.sample_rate as f64;
        (0..self.samples.len()).map(|i| i as f64 * step).collect()
    }

    /// Quantized PCM frames for playback.
    ///
    /// Uses the same quantizer as the WAV encoder, so the played signal and
    /// the saved file are frame-identical.
    pub fn to_pcm_frames(&self) -> Vec<i16> {
        wav::quantize(&self.samples)
    }
}

/// Generates a green noise buffer with a fresh entropy seed.
///
/// Two calls with identical parameters produce different buffers. Use
/// [`generate_seeded`] for reproducible output.
pub fn generate(params: &GenerationParameters) -> NoiseResult<NoiseBuffer> {
    generate_seeded(params, entropy_seed())
}

/// Generates a green noise buffer from an explicit seed.
pub fn generate_seeded(params: &GenerationParameters, seed: u64) -> NoiseResult<NoiseBuffer> {
    let num_samples = params.num_samples()?;
    let mut rng = create_rng(seed);
    let samples = green_noise(&mut rng, num_samples)?;
    Ok(NoiseBuffer {
        samples,
        sample_rate: params.sample_rate,
    })
}

/// Integrated white noise, peak-normalized to 1.0.
fn green_noise(rng: &mut Pcg32, num_samples: usize) -> NoiseResult<Vec<f64>> {
    let normal = Normal::new(0.0_f64, 1.0).expect("unit normal parameters are valid");

    // Running cumulative sum of the white draws
    let mut samples = Vec::with_capacity(num_samples);
    let mut acc = 0.0_f64;
    for _ in 0..num_samples {
        acc += normal.sample(rng);
        samples.push(acc);
    }

    let peak = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, f64::max);
    if peak == 0.0 {
        return Err(NoiseError::DegenerateSignal);
    }

    let scale = 1.0 / peak;
    for s in samples.iter_mut() {
        *s *= scale;
    }

    Ok(samples)
}
