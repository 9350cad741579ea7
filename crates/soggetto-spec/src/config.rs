//! Synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tolerance when checking that a tone covers a whole number of samples.
const WHOLE_SAMPLE_EPSILON: f64 = 1e-6;

/// Largest sample count a mono 16-bit RIFF data chunk can describe.
pub const MAX_WAV_SAMPLES: usize = ((u32::MAX - 36) / 2) as usize;

/// Parameters for rendering a motif to audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthConfig {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Length of each tone in seconds.
    #[serde(default = "default_tone_duration")]
    pub tone_duration: f64,
    /// Peak sample magnitude in (0, 1].
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Rescale the rendered buffer so its peak equals `amplitude`.
    #[serde(default)]
    pub normalize: bool,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_tone_duration() -> f64 {
    1.0
}

fn default_amplitude() -> f64 {
    1.0
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            tone_duration: default_tone_duration(),
            amplitude: default_amplitude(),
            normalize: false,
        }
    }
}

impl SynthConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks every field.
    ///
    /// # Returns
    /// * `Ok(())` if the config can be rendered
    /// * `Err(ConfigError)` naming the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }

        if !self.tone_duration.is_finite() || self.tone_duration <= 0.0 {
            return Err(ConfigError::InvalidDuration {
                duration: self.tone_duration,
            });
        }

        let exact = self.sample_rate as f64 * self.tone_duration;
        if exact > MAX_WAV_SAMPLES as f64 {
            return Err(ConfigError::ToneTooLong {
                samples: exact,
                max: MAX_WAV_SAMPLES,
            });
        }

        if exact.round() < 1.0 || (exact - exact.round()).abs() > WHOLE_SAMPLE_EPSILON {
            return Err(ConfigError::FractionalToneLength {
                duration: self.tone_duration,
                rate: self.sample_rate,
            });
        }

        if !self.amplitude.is_finite() || self.amplitude <= 0.0 || self.amplitude > 1.0 {
            return Err(ConfigError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }

        Ok(())
    }

    /// Number of samples in one tone (`sample_rate * tone_duration`).
    ///
    /// Only meaningful for a config that passes [`SynthConfig::validate`],
    /// which bounds it by [`MAX_WAV_SAMPLES`].
    pub fn samples_per_tone(&self) -> usize {
        (self.sample_rate as f64 * self.tone_duration).round() as usize
    }
}
