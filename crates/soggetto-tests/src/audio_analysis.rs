//! WAV decoding and simple signal measurements.

use std::io::Cursor;

use crate::determinism::compute_hash;

/// A decoded 16-bit WAV file.
#[derive(Debug, Clone)]
pub struct DecodedWav {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Samples scaled to [-1.0, 1.0].
    pub samples: Vec<f64>,
}

/// Decodes WAV bytes with `hound`.
///
/// Only integer PCM is accepted; anything else is an error.
pub fn decode_wav(wav_data: &[u8]) -> Result<DecodedWav, hound::Error> {
    let reader = hound::WavReader::new(Cursor::new(wav_data))?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(hound::Error::Unsupported);
    }

    let samples = reader
        .into_samples::<i16>()
        .map(|s| s.map(|v| v as f64 / 32767.0))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DecodedWav {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}

/// Hashes the 16-bit samples of WAV bytes as read back by `hound`.
///
/// Matches `WavResult::pcm_hash` for any file the backend wrote.
pub fn pcm_hash(wav_data: &[u8]) -> Result<String, hound::Error> {
    let reader = hound::WavReader::new(Cursor::new(wav_data))?;
    let mut pcm = Vec::with_capacity(reader.len() as usize * 2);
    for sample in reader.into_samples::<i16>() {
        pcm.extend_from_slice(&sample?.to_le_bytes());
    }
    Ok(compute_hash(&pcm))
}

/// Estimates the frequency of a steady tone from its upward zero crossings.
///
/// Returns 0.0 for fewer than two samples.
pub fn estimate_frequency(samples: &[f64], sample_rate: u32) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let crossings = samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count();
    crossings as f64 * sample_rate as f64 / samples.len() as f64
}
