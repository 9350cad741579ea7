//! Error types for configuration and backend reporting.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::SynthConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sample rate is zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Tone duration is not a positive finite number.
    #[error("invalid tone duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Tone duration does not cover a whole number of samples.
    #[error("tone duration {duration}s is not a whole number of samples at {rate} Hz")]
    FractionalToneLength {
        /// Configured duration.
        duration: f64,
        /// Configured sample rate.
        rate: u32,
    },

    /// One tone needs more samples than a WAV file can hold.
    #[error("tone of {samples} samples exceeds the WAV limit of {max} samples")]
    ToneTooLong {
        /// Requested samples per tone.
        samples: f64,
        /// Largest representable sample count.
        max: usize,
    },

    /// Amplitude outside (0, 1].
    #[error("invalid amplitude: {amplitude} (expected 0 < amplitude <= 1)")]
    InvalidAmplitude {
        /// The invalid amplitude.
        amplitude: f64,
    },

    /// Config JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Trait for errors reported with a stable code and category.
///
/// # Example
///
/// ```
/// use soggetto_spec::{BackendError, ConfigError};
///
/// let err = ConfigError::InvalidSampleRate { rate: 0 };
/// assert_eq!(err.code(), "CONFIG_001");
/// assert_eq!(err.category(), "config");
/// ```
pub trait BackendError: std::error::Error {
    /// Stable error code such as "AUDIO_001".
    fn code(&self) -> &'static str;

    /// Human-readable message; defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category for grouping related errors ("config", "audio").
    fn category(&self) -> &'static str;
}

impl BackendError for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidSampleRate { .. } => "CONFIG_001",
            ConfigError::InvalidDuration { .. } => "CONFIG_002",
            ConfigError::FractionalToneLength { .. } => "CONFIG_003",
            ConfigError::InvalidAmplitude { .. } => "CONFIG_004",
            ConfigError::Parse(_) => "CONFIG_005",
            ConfigError::ToneTooLong { .. } => "CONFIG_006",
        }
    }

    fn category(&self) -> &'static str {
        "config"
    }
}
