//! Motif rendering integration tests.

use proptest::prelude::*;
use soggetto_backend_audio::{generate, synthesize};
use soggetto_spec::{encode, Note, SynthConfig};

/// Counts negative-to-non-negative transitions.
fn upward_crossings(samples: &[f64]) -> usize {
    samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count()
}

#[test]
fn test_each_tone_has_its_pitch() {
    let config = SynthConfig {
        sample_rate: 8000,
        tone_duration: 1.0,
        ..Default::default()
    };
    let motif = encode("Josquin des Prez");
    let buffer = synthesize(&motif, &config).unwrap();
    let n = config.samples_per_tone();

    for (i, entry) in motif.iter().enumerate() {
        let tone = &buffer.samples()[i * n..(i + 1) * n];
        let cycles = upward_crossings(tone) as f64;
        assert!(
            (cycles - entry.frequency()).abs() <= 1.5,
            "tone {} ({}) has {} cycles, expected ~{}",
            i,
            entry.note,
            cycles,
            entry.frequency()
        );
    }
}

#[test]
fn test_amplitude_scales_output() {
    let loud = SynthConfig {
        sample_rate: 8000,
        tone_duration: 0.25,
        amplitude: 1.0,
        normalize: false,
    };
    let quiet = SynthConfig {
        amplitude: 0.5,
        ..loud.clone()
    };

    let motif = encode("u");
    let a = synthesize(&motif, &loud).unwrap();
    let b = synthesize(&motif, &quiet).unwrap();

    for (x, y) in a.samples().iter().zip(b.samples()) {
        assert!((x * 0.5 - y).abs() < 1e-12);
    }
}

#[test]
fn test_pitch_order_for_all_vowels() {
    let motif = encode("AEIOU");
    assert_eq!(
        motif.notes(),
        vec![Note::F, Note::D, Note::E, Note::C, Note::G]
    );

    let result = generate(
        &motif,
        &SynthConfig {
            sample_rate: 8000,
            tone_duration: 0.5,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(result.num_tones, 5);
    assert_eq!(result.wav.num_samples, 5 * 4000);
}

proptest! {
    #[test]
    fn buffer_length_is_tones_times_tone_length(
        text in "[a-zA-Z ]{0,24}",
        rate in prop::sample::select(vec![8000u32, 11025, 22050, 44100, 48000]),
        duration in prop::sample::select(vec![0.02f64, 0.1, 0.5, 1.0]),
    ) {
        let config = SynthConfig {
            sample_rate: rate,
            tone_duration: duration,
            ..Default::default()
        };
        prop_assume!(config.validate().is_ok());

        let motif = encode(&text);
        let buffer = synthesize(&motif, &config).unwrap();
        let expected = motif.len() * (rate as f64 * duration).round() as usize;
        prop_assert_eq!(buffer.len(), expected);
    }

    #[test]
    fn rendered_samples_stay_in_range(text in "[aeiou]{1,6}", amplitude in 0.01f64..=1.0) {
        let config = SynthConfig {
            sample_rate: 8000,
            tone_duration: 0.05,
            amplitude,
            normalize: false,
        };
        let buffer = synthesize(&encode(&text), &config).unwrap();
        prop_assert!(buffer.samples().iter().all(|s| s.abs() <= amplitude + 1e-12));
    }
}
