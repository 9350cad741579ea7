//! Determinism checks.

/// Outcome of running a generator several times.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether every run produced the same bytes.
    pub is_deterministic: bool,
    /// BLAKE3 hash of each run's output.
    pub hashes: Vec<String>,
}

/// Computes the BLAKE3 hex digest of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Runs `generate` `runs` times and compares the output hashes.
///
/// # Panics
/// If `runs` is less than 2.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    assert!(runs >= 2, "determinism check needs at least two runs");

    let hashes: Vec<String> = (0..runs).map(|_| compute_hash(&generate())).collect();
    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    DeterminismResult {
        is_deterministic,
        hashes,
    }
}
