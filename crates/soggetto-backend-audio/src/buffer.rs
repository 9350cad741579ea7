//! Mono sample buffer.

use crate::error::{AudioError, AudioResult};

/// Mono audio samples at a fixed sample rate.
///
/// Samples are nominally in [-1.0, 1.0]; the WAV writer clips anything
/// outside that range.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Creates a buffer from samples.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Creates an empty buffer.
    pub fn empty(sample_rate: u32) -> Self {
        Self::new(Vec::new(), sample_rate)
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Returns the largest absolute sample value (0.0 when empty).
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }

    /// Fails with [`AudioError::SampleRateMismatch`] unless both buffers
    /// share a sample rate.
    pub(crate) fn ensure_same_rate(&self, other: &AudioBuffer) -> AudioResult<()> {
        if self.sample_rate != other.sample_rate {
            return Err(AudioError::SampleRateMismatch {
                left: self.sample_rate,
                right: other.sample_rate,
            });
        }
        Ok(())
    }

    /// Appends `other` to the end of this buffer.
    ///
    /// # Errors
    /// [`AudioError::SampleRateMismatch`] if the rates differ.
    pub fn concat(mut self, other: AudioBuffer) -> AudioResult<AudioBuffer> {
        self.ensure_same_rate(&other)?;
        self.samples.extend(other.samples);
        Ok(self)
    }

    /// Adds `other` to this buffer sample by sample.
    ///
    /// # Errors
    /// [`AudioError::SampleRateMismatch`] if the rates differ, or
    /// [`AudioError::LengthMismatch`] if the lengths differ.
    pub fn mix(&self, other: &AudioBuffer) -> AudioResult<AudioBuffer> {
        self.ensure_same_rate(other)?;
        if self.len() != other.len() {
            return Err(AudioError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let samples = self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| a + b)
            .collect();
        Ok(AudioBuffer::new(samples, self.sample_rate))
    }

    /// Scales every sample so the peak magnitude equals `target`.
    ///
    /// A silent buffer is left untouched.
    pub fn normalize_to(&mut self, target: f64) {
        let peak = self.peak();
        if peak == 0.0 {
            return;
        }
        let gain = target / peak;
        for sample in &mut self.samples {
            *sample *= gain;
        }
    }
}
