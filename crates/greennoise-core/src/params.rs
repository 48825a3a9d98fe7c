//! Generation parameters and validation.

use crate::error::{NoiseError, NoiseResult};

/// Parameters for a single generation request.
///
/// `low_freq` and `high_freq` are carried for display only; the synthesis
/// algorithm does not apply them (no bandpass filter is implemented).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration: f64,
    /// Low frequency bound in Hz (metadata only).
    pub low_freq: u32,
    /// High frequency bound in Hz (metadata only).
    pub high_freq: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration: 5.0,
            low_freq: 20,
            high_freq: 800,
        }
    }
}

impl GenerationParameters {
    /// Creates parameters with the given rate and duration and default
    /// frequency bounds.
    pub fn new(sample_rate: u32, duration: f64) -> Self {
        Self {
            sample_rate,
            duration,
            ..Self::default()
        }
    }

    /// Number of samples this request would produce.
    ///
    /// Fails with `InvalidParameter` when the sample rate is zero, the
    /// duration is not a positive finite number, or the rounded sample
    /// count is below one.
    pub fn num_samples(&self) -> NoiseResult<usize> {
        if self.sample_rate == 0 {
            return Err(NoiseError::invalid_param("sample_rate", "must be positive"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(NoiseError::invalid_param(
                "duration",
                format!("must be a positive number of seconds, got {}", self.duration),
            ));
        }
        let count = (self.sample_rate as f64 * self.duration).round();
        if count < 1.0 {
            return Err(NoiseError::invalid_param(
                "duration",
                format!(
                    "{} s at {} Hz rounds to zero samples",
                    self.duration, self.sample_rate
                ),
            ));
        }
        Ok(count as usize)
    }
}
