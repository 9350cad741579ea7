//! Soggetto Cavato Core Library
//!
//! This crate provides the vowel table, the motif encoder and the synthesis
//! configuration for soggetto cavato: the Renaissance technique of carving a
//! melody out of the vowels of a text.
//!
//! # Overview
//!
//! - **Vowel table**: each of `a e i o u` is bound to a solfège syllable and a
//!   pitch in octave 4
//! - **Encoder**: a single left-to-right pass that keeps the vowels of a text
//!   and maps them through the table
//! - **Config**: sample rate, tone duration and amplitude used by the audio
//!   backend
//!
//! # Example
//!
//! ```
//! use soggetto_spec::encode;
//!
//! let motif = encode("Josquin des Prez");
//! assert_eq!(motif.solfege_line(), "sol ut mi re re");
//! assert_eq!(motif.notes_line(), "C G E D D");
//! ```
//!
//! # Modules
//!
//! - [`vowel`]: Syllables, notes and the fixed vowel table
//! - [`motif`]: The encoded motif and the text encoder
//! - [`config`]: Synthesis configuration and validation
//! - [`error`]: Error types and the `BackendError` trait

pub mod config;
pub mod error;
pub mod motif;
pub mod vowel;

// Re-export commonly used types at the crate root
pub use config::{SynthConfig, MAX_WAV_SAMPLES};
pub use error::{BackendError, ConfigError};
pub use motif::{encode, Motif};
pub use vowel::{lookup, midi_to_frequency, Note, Syllable, VowelEntry, VOWEL_TABLE};
