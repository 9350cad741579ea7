//! Deterministic WAV file writer.
//!
//! This module writes mono 16-bit PCM WAV files with no timestamps or
//! variable metadata, so the same motif and config always produce the same
//! bytes. The BLAKE3 hash of the PCM data identifies a rendering.

mod file;
mod format;
mod result;
mod writer;


// Re-export public API
pub use file::write_wav_file;
pub use format::WavFormat;
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec, WAV_HEADER_LEN};
