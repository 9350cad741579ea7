//! Tone synthesis.
//!
//! Each motif entry becomes one constant-frequency sine tone. Tones are
//! rendered independently and laid end to end: no envelope, no gap and no
//! cross-fade between them.

use std::f64::consts::PI;

use soggetto_spec::{Motif, SynthConfig, MAX_WAV_SAMPLES};
use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::error::{AudioError, AudioResult};

/// 2π
pub const TWO_PI: f64 = 2.0 * PI;

/// A source of a fixed number of samples.
pub trait Synthesizer {
    /// Renders `num_samples` samples at `sample_rate` Hz.
    fn synthesize(&self, num_samples: usize, sample_rate: f64) -> Vec<f64>;
}

/// Sine tone parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineTone {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SineTone {
    /// Creates a new sine tone.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SineTone {
    fn synthesize(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        let step = TWO_PI * self.frequency / sample_rate;
        (0..num_samples)
            .map(|n| self.amplitude * (step * n as f64).sin())
            .collect()
    }
}

/// Renders a motif to a mono buffer.
///
/// The config is validated first. Every entry contributes exactly
/// `config.samples_per_tone()` samples, so the result holds
/// `motif.len() * samples_per_tone` samples; an empty motif renders an
/// empty buffer.
///
/// # Errors
/// [`AudioError::Config`] if the config fails validation, or
/// [`AudioError::TooLong`] if the whole motif would not fit in a WAV file.
/// Both are reported before any samples are allocated.
pub fn synthesize(motif: &Motif, config: &SynthConfig) -> AudioResult<AudioBuffer> {
    config.validate()?;

    let samples_per_tone = config.samples_per_tone();
    let num_samples = motif
        .len()
        .checked_mul(samples_per_tone)
        .filter(|&n| n <= MAX_WAV_SAMPLES)
        .ok_or(AudioError::TooLong {
            num_samples: motif.len().saturating_mul(samples_per_tone),
        })?;

    let sample_rate = config.sample_rate as f64;
    let mut samples = Vec::with_capacity(num_samples);

    for entry in motif {
        let tone = SineTone::new(entry.frequency(), config.amplitude);
        samples.extend(tone.synthesize(samples_per_tone, sample_rate));
    }

    let mut buffer = AudioBuffer::new(samples, config.sample_rate);
    if config.normalize {
        buffer.normalize_to(config.amplitude);
    }

    debug!(
        tones = motif.len(),
        samples = buffer.len(),
        sample_rate = config.sample_rate,
        "rendered motif"
    );

    Ok(buffer)
}
