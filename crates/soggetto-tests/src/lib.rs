//! Soggetto End-to-End Test Infrastructure
//!
//! This crate holds cross-crate tests for the whole pipeline:
//!
//! - Generation: text -> motif -> WAV file
//! - **Determinism**: byte-identical output across runs
//! - Properties: encoder invariants over arbitrary text
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p soggetto-tests
//! ```

pub mod audio_analysis;
pub mod determinism;

// Re-export commonly used items
pub use audio_analysis::{decode_wav, estimate_frequency, pcm_hash, DecodedWav};
pub use determinism::{compute_hash, verify_determinism, DeterminismResult};
