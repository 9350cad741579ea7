//! Error types for audio backend.

use soggetto_spec::{BackendError, ConfigError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio rendering and writing.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Synthesis configuration rejected.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// Two buffers with different sample rates were joined.
    #[error("sample rate mismatch: {left} Hz vs {right} Hz")]
    SampleRateMismatch {
        /// Rate of the left-hand buffer.
        left: u32,
        /// Rate of the right-hand buffer.
        right: u32,
    },

    /// Two buffers of different lengths were mixed.
    #[error("length mismatch: {left} samples vs {right} samples")]
    LengthMismatch {
        /// Length of the left-hand buffer.
        left: usize,
        /// Length of the right-hand buffer.
        right: usize,
    },

    /// Frequency band is empty, negative or not finite.
    #[error("invalid frequency band: {low} Hz to {high} Hz")]
    InvalidBand {
        /// Lower edge in Hz.
        low: f64,
        /// Upper edge in Hz.
        high: f64,
    },

    /// Buffer too long for a RIFF data chunk.
    #[error("audio too long for WAV: {num_samples} samples")]
    TooLong {
        /// Number of samples in the buffer.
        num_samples: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Config(_) => "AUDIO_001",
            AudioError::SampleRateMismatch { .. } => "AUDIO_002",
            AudioError::TooLong { .. } => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
            AudioError::LengthMismatch { .. } => "AUDIO_005",
            AudioError::InvalidBand { .. } => "AUDIO_006",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
