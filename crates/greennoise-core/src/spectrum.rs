//! Magnitude spectrum computation for plotting.
//!
//! A single forward FFT over the whole buffer, keeping the bins from DC up
//! to Nyquist. No windowing is applied; the spectrum is for visual display
//! of the 1/f² tilt rather than for metric extraction.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::generator::NoiseBuffer;

/// Upper frequency bound for spectrum display, in Hz.
///
/// The Nyquist limit capped at 5 kHz, where the interesting portion of a
/// green spectrum lives.
pub fn display_limit_hz(sample_rate: u32) -> f64 {
    (sample_rate as f64 / 2.0).min(5000.0)
}

/// Magnitude spectrum of a noise buffer.
///
/// `frequencies[i]` is the center frequency of bin `i` in Hz and
/// `magnitudes[i]` its unnormalized FFT magnitude. Both vectors have
/// `n / 2 + 1` entries for an `n`-sample buffer.
#[derive(Debug, Clone)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Computes the spectrum of a generated buffer.
    pub fn of(buffer: &NoiseBuffer) -> Self {
        Self::of_samples(buffer.samples(), buffer.sample_rate())
    }

    /// Computes the spectrum of raw samples at the given rate.
    pub fn of_samples(samples: &[f64], sample_rate: u32) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self {
                frequencies: Vec::new(),
                magnitudes: Vec::new(),
            };
        }

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);

        let mut buffer: Vec<Complex<f64>> =
            samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
        fft.process(&mut buffer);

        // Positive frequencies only, DC through Nyquist
        let bins = n / 2 + 1;
        let freq_resolution = sample_rate as f64 / n as f64;

        let frequencies = (0..bins).map(|i| i as f64 * freq_resolution).collect();
        let magnitudes = buffer.iter().take(bins).map(|c| c.norm()).collect();

        Self {
            frequencies,
            magnitudes,
        }
    }

    /// Number of frequency bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the spectrum holds no bins.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
