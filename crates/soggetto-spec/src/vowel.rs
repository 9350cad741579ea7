//! Solfège syllables, pitches and the fixed vowel table.
//!
//! The table is the one used by Josquin-style soggetto cavato: each vowel
//! of the text selects a hexachord syllable, and each syllable sounds a
//! fixed pitch in octave 4.

use std::fmt;

/// A hexachord solfège syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syllable {
    /// `ut`
    Ut,
    /// `re`
    Re,
    /// `mi`
    Mi,
    /// `fa`
    Fa,
    /// `sol`
    Sol,
}

impl Syllable {
    /// Returns the lowercase syllable name (e.g., "sol").
    pub fn as_str(&self) -> &'static str {
        match self {
            Syllable::Ut => "ut",
            Syllable::Re => "re",
            Syllable::Mi => "mi",
            Syllable::Fa => "fa",
            Syllable::Sol => "sol",
        }
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A natural pitch in octave 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    /// C4
    C,
    /// D4
    D,
    /// E4
    E,
    /// F4
    F,
    /// G4
    G,
}

impl Note {
    /// Returns the note letter (e.g., "C").
    pub fn letter(&self) -> &'static str {
        match self {
            Note::C => "C",
            Note::D => "D",
            Note::E => "E",
            Note::F => "F",
            Note::G => "G",
        }
    }

    /// Returns the MIDI note number (C4 = 60).
    pub fn midi_number(&self) -> u8 {
        match self {
            Note::C => 60,
            Note::D => 62,
            Note::E => 64,
            Note::F => 65,
            Note::G => 67,
        }
    }

    /// Returns the frequency in Hz.
    ///
    /// Values are fixed to four decimal places so that rendered audio does
    /// not depend on floating-point `powf` behaviour.
    pub fn frequency(&self) -> f64 {
        match self {
            Note::C => 261.6256,
            Note::D => 293.6648,
            Note::E => 329.6276,
            Note::F => 349.2282,
            Note::G => 391.9954,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Converts a MIDI note number to frequency in Hz (A4 = 440 Hz, 12-TET).
pub fn midi_to_frequency(midi_note: u8) -> f64 {
    440.0 * 2.0_f64.powf((midi_note as f64 - 69.0) / 12.0)
}

/// One row of the vowel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VowelEntry {
    /// Lowercase vowel.
    pub vowel: char,
    /// Syllable sung for this vowel.
    pub syllable: Syllable,
    /// Pitch sounded for this vowel.
    pub note: Note,
}

impl VowelEntry {
    /// Returns the frequency of this entry's note in Hz.
    pub fn frequency(&self) -> f64 {
        self.note.frequency()
    }
}

/// The fixed vowel table.
pub const VOWEL_TABLE: [VowelEntry; 5] = [
    VowelEntry {
        vowel: 'a',
        syllable: Syllable::Fa,
        note: Note::F,
    },
    VowelEntry {
        vowel: 'e',
        syllable: Syllable::Re,
        note: Note::D,
    },
    VowelEntry {
        vowel: 'i',
        syllable: Syllable::Mi,
        note: Note::E,
    },
    VowelEntry {
        vowel: 'o',
        syllable: Syllable::Sol,
        note: Note::C,
    },
    VowelEntry {
        vowel: 'u',
        syllable: Syllable::Ut,
        note: Note::G,
    },
];

/// Looks up a character in the vowel table.
///
/// Matching is ASCII case-insensitive. Returns `None` for anything that is
/// not one of `a e i o u`, including accented vowels.
pub fn lookup(c: char) -> Option<VowelEntry> {
    let lower = c.to_ascii_lowercase();
    VOWEL_TABLE.iter().find(|entry| entry.vowel == lower).copied()
}
