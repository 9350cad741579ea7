//! Determinism tests: identical input and config give identical bytes.

use soggetto_backend_audio::generate;
use soggetto_spec::{encode, SynthConfig};
use soggetto_tests::{pcm_hash, verify_determinism};

fn config() -> SynthConfig {
    SynthConfig {
        sample_rate: 11025,
        tone_duration: 0.2,
        ..Default::default()
    }
}

#[test]
fn test_wav_bytes_are_deterministic() {
    let result = verify_determinism(
        || {
            generate(&encode("Hercules Dux Ferrariae"), &config())
                .unwrap()
                .wav
                .wav_data
        },
        3,
    );
    assert!(result.is_deterministic, "hashes differ: {:?}", result.hashes);
}

#[test]
fn test_pcm_hash_round_trips_through_file_bytes() {
    let result = generate(&encode("Josquin des Prez"), &config()).unwrap();
    assert_eq!(pcm_hash(&result.wav.wav_data).unwrap(), result.wav.pcm_hash);
}

#[test]
fn test_case_does_not_change_audio() {
    let lower = generate(&encode("josquin des prez"), &config()).unwrap();
    let upper = generate(&encode("JOSQUIN DES PREZ"), &config()).unwrap();
    assert_eq!(lower.wav.pcm_hash, upper.wav.pcm_hash);
}

#[test]
fn test_different_texts_give_different_audio() {
    let a = generate(&encode("aeiou"), &config()).unwrap();
    let b = generate(&encode("uoiea"), &config()).unwrap();
    assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
}
