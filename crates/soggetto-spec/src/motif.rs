//! The encoded motif and the text encoder.

use crate::vowel::{lookup, Note, Syllable, VowelEntry};

/// An ordered sequence of vowel-table entries carved from a text.
///
/// One entry per vowel, in the order the vowels appear. A motif has no
/// mutating API; build a new one with [`encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Motif {
    entries: Vec<VowelEntry>,
}

impl Motif {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the text contained no vowels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, VowelEntry> {
        self.entries.iter()
    }

    /// Returns the entries as a slice.
    pub fn entries(&self) -> &[VowelEntry] {
        &self.entries
    }

    /// Returns the syllable of each entry.
    pub fn syllables(&self) -> Vec<Syllable> {
        self.entries.iter().map(|e| e.syllable).collect()
    }

    /// Returns the note of each entry.
    pub fn notes(&self) -> Vec<Note> {
        self.entries.iter().map(|e| e.note).collect()
    }

    /// Returns the frequency of each entry in Hz.
    pub fn frequencies(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.frequency()).collect()
    }

    /// Space-joined syllables, e.g. `"sol ut mi re re"`.
    pub fn solfege_line(&self) -> String {
        join(self.entries.iter().map(|e| e.syllable.as_str()))
    }

    /// Space-joined note letters, e.g. `"C G E D D"`.
    pub fn notes_line(&self) -> String {
        join(self.entries.iter().map(|e| e.note.letter()))
    }
}

impl<'a> IntoIterator for &'a Motif {
    type Item = &'a VowelEntry;
    type IntoIter = std::slice::Iter<'a, VowelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

/// Encodes a text into a motif.
///
/// Scans `text` once, left to right. Every character whose ASCII-lowercase
/// form is a vowel contributes one entry; everything else is skipped. A
/// text without vowels yields an empty motif.
pub fn encode(text: &str) -> Motif {
    Motif {
        entries: text.chars().filter_map(lookup).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn vowel_count(s: &str) -> usize {
        s.chars()
            .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .count()
    }

    #[test]
    fn test_josquin() {
        let motif = encode("Josquin des Prez");
        assert_eq!(motif.len(), 5);
        assert_eq!(motif.solfege_line(), "sol ut mi re re");
        assert_eq!(motif.notes_line(), "C G E D D");
        assert_eq!(
            motif.syllables(),
            vec![
                Syllable::Sol,
                Syllable::Ut,
                Syllable::Mi,
                Syllable::Re,
                Syllable::Re
            ]
        );
    }

    #[test]
    fn test_all_vowels_in_table_order() {
        let motif = encode("aeiou");
        assert_eq!(motif.solfege_line(), "fa re mi sol ut");
        assert_eq!(motif.notes(), vec![Note::F, Note::D, Note::E, Note::C, Note::G]);
    }

    #[test]
    fn test_empty_and_vowelless() {
        for text in ["", "xyz", "   ", "Rhythm & blš!"] {
            let motif = encode(text);
            assert!(motif.is_empty(), "{:?} should encode to nothing", text);
            assert_eq!(motif.solfege_line(), "");
            assert_eq!(motif.notes_line(), "");
        }
    }

    #[test]
    fn test_accented_vowels_are_skipped() {
        let motif = encode("café über");
        // c-a-f-é / ü-b-e-r: only the plain a and e count
        assert_eq!(motif.solfege_line(), "fa re");
    }

    #[test]
    fn test_frequencies_follow_notes() {
        let motif = encode("ou");
        assert_eq!(motif.frequencies(), vec![261.6256, 391.9954]);
    }

    proptest! {
        #[test]
        fn motif_length_equals_vowel_count(s in any::<String>()) {
            prop_assert_eq!(encode(&s).len(), vowel_count(&s));
        }

        #[test]
        fn motif_ignores_case(s in "[a-zA-Z ,.!?]{0,64}") {
            prop_assert_eq!(encode(&s.to_ascii_uppercase()), encode(&s.to_ascii_lowercase()));
        }

        #[test]
        fn motif_preserves_order(s in "[a-zA-Z0-9 ]{0,64}") {
            let motif = encode(&s);
            let vowels: Vec<char> = s
                .chars()
                .map(|c| c.to_ascii_lowercase())
                .filter(|c| "aeiou".contains(*c))
                .collect();
            let encoded: Vec<char> = motif.iter().map(|e| e.vowel).collect();
            prop_assert_eq!(encoded, vowels);
        }

        #[test]
        fn encoding_is_repeatable(s in any::<String>()) {
            prop_assert_eq!(encode(&s), encode(&s));
        }
    }
}
