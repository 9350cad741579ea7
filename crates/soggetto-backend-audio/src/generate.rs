//! Main entry points for rendering a motif.
//!
//! Renders the motif with [`synthesize`] and encodes the result either in
//! memory or straight to a file.

use std::path::Path;

use soggetto_spec::{Motif, SynthConfig};
use tracing::info;

use crate::buffer::AudioBuffer;
use crate::error::AudioResult;
use crate::synthesis::synthesize;
use crate::wav::{write_wav_file, WavResult};

/// Result of in-memory generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// WAV file data.
    pub wav: WavResult,
    /// Number of tones rendered.
    pub num_tones: usize,
}

/// Renders a motif to WAV bytes.
///
/// # Arguments
/// * `motif` - Encoded motif; may be empty
/// * `config` - Synthesis parameters
///
/// # Returns
/// Encoded WAV file and metadata
pub fn generate(motif: &Motif, config: &SynthConfig) -> AudioResult<GenerateResult> {
    let buffer = synthesize(motif, config)?;
    let wav = WavResult::from_buffer(&buffer)?;

    Ok(GenerateResult {
        wav,
        num_tones: motif.len(),
    })
}

/// Renders a motif and writes it to `path`.
///
/// Returns the rendered buffer. Fails with [`crate::AudioError::Io`] if the
/// path is not writable; nothing is retried.
pub fn generate_to_file(
    motif: &Motif,
    config: &SynthConfig,
    path: &Path,
) -> AudioResult<AudioBuffer> {
    let buffer = synthesize(motif, config)?;
    write_wav_file(path, &buffer)?;

    info!(
        path = %path.display(),
        tones = motif.len(),
        seconds = buffer.duration_seconds(),
        "generated soggetto"
    );

    Ok(buffer)
}
