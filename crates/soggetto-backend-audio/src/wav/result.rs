//! WAV file generation result type.

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};
use crate::buffer::AudioBuffer;
use crate::error::AudioResult;

/// An encoded WAV file and its identifying metadata.
#[derive(Debug, Clone)]
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
    /// Encodes a buffer as a mono 16-bit WAV file.
    pub fn from_buffer(buffer: &AudioBuffer) -> AudioResult<Self> {
        let pcm = samples_to_pcm16(buffer.samples());
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(buffer.sample_rate());
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
