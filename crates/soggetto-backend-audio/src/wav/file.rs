//! Writing WAV files to disk.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};
use crate::buffer::AudioBuffer;
use crate::error::AudioResult;

/// Writes `buffer` to `path` as a mono 16-bit WAV file.
///
/// The whole file is encoded first, so a buffer too long for WAV fails
/// without touching `path`. The file is then created (or truncated) and
/// closed when this function returns. Parent directories are not created.
///
/// # Errors
/// [`crate::AudioError::TooLong`] if the buffer cannot be described by a
/// RIFF header, or [`crate::AudioError::Io`] if the path cannot be created
/// or written.
pub fn write_wav_file(path: &Path, buffer: &AudioBuffer) -> AudioResult<()> {
    let pcm = samples_to_pcm16(buffer.samples());
    let wav = write_wav_to_vec(&WavFormat::mono(buffer.sample_rate()), &pcm)?;

    let mut file = File::create(path)?;
    file.write_all(&wav)?;
    file.flush()?;

    debug!(path = %path.display(), bytes = wav.len(), "wrote wav file");
    Ok(())
}
