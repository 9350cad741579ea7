//! Soggetto Audio Backend
//!
//! This crate renders an encoded motif as audio: one fixed-length sine tone
//! per vowel, concatenated and written as a mono 16-bit PCM WAV file.
//!
//! # Determinism
//!
//! Rendering uses no randomness. Given the same motif and config, the
//! output is byte-identical across runs (on the same platform), and the
//! BLAKE3 hash of the PCM data identifies it.
//!
//! # Example
//!
//! ```no_run
//! use soggetto_backend_audio::generate_to_file;
//! use soggetto_spec::{encode, SynthConfig};
//!
//! let motif = encode("Josquin des Prez");
//! let buffer = generate_to_file(&motif, &SynthConfig::default(), "josquin.wav".as_ref())?;
//! println!("{} samples", buffer.len());
//! # Ok::<(), soggetto_backend_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] / [`generate_to_file()`] - Main entry points
//! - [`buffer`] - Mono sample buffer
//! - [`spectral`] - Convolution and band removal on buffers
//! - [`synthesis`] - Sine tone rendering
//! - [`wav`] - Deterministic WAV file writer

pub mod buffer;
pub mod error;
pub mod generate;
pub mod spectral;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_to_file, GenerateResult};
pub use synthesis::synthesize;
pub use wav::{write_wav_file, WavResult};
