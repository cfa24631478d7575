//! Pitch model: canonical name tables and the enharmonic normalizer
//!
//! User input is a bare letter with up to two accidental marks. Rare
//! spellings (B#, Fb, double accidentals) are collapsed onto one of the
//! 17 canonical tonic spellings before anything else sees them.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::errors::SpellingError;
use crate::models::{Accidental, Letter, NoteName, PitchClass};

const fn natural(letter: Letter) -> NoteName {
    NoteName::natural(letter)
}

const fn sharp(letter: Letter) -> NoteName {
    NoteName::new(letter, Accidental::Sharp)
}

const fn flat(letter: Letter) -> NoteName {
    NoteName::new(letter, Accidental::Flat)
}

/// Canonical sharp spelling of each pitch class
pub static SHARP_NAMES: [NoteName; 12] = [
    natural(Letter::C),
    sharp(Letter::C),
    natural(Letter::D),
    sharp(Letter::D),
    natural(Letter::E),
    natural(Letter::F),
    sharp(Letter::F),
    natural(Letter::G),
    sharp(Letter::G),
    natural(Letter::A),
    sharp(Letter::A),
    natural(Letter::B),
];

/// Canonical flat spelling of each pitch class
pub static FLAT_NAMES: [NoteName; 12] = [
    natural(Letter::C),
    flat(Letter::D),
    natural(Letter::D),
    flat(Letter::E),
    natural(Letter::E),
    natural(Letter::F),
    flat(Letter::G),
    natural(Letter::G),
    flat(Letter::A),
    natural(Letter::A),
    flat(Letter::B),
    natural(Letter::B),
];

/// Enharmonic candidates per pitch class, in preference order
///
/// White keys have a single candidate. Spellings such as B# or Fbb are
/// reached through the expected-letter rule of the resolver instead.
static CANDIDATES: [&[NoteName]; 12] = [
    &[natural(Letter::C)],
    &[sharp(Letter::C), flat(Letter::D)],
    &[natural(Letter::D)],
    &[sharp(Letter::D), flat(Letter::E)],
    &[natural(Letter::E)],
    &[natural(Letter::F)],
    &[sharp(Letter::F), flat(Letter::G)],
    &[natural(Letter::G)],
    &[sharp(Letter::G), flat(Letter::A)],
    &[natural(Letter::A)],
    &[sharp(Letter::A), flat(Letter::B)],
    &[natural(Letter::B)],
];

/// Rare spelling → canonical spelling
const ALIASES: &[(&str, &str)] = &[
    ("B#", "C"),
    ("E#", "F"),
    ("Cb", "B"),
    ("Fb", "E"),
    ("C##", "D"),
    ("D##", "E"),
    ("E##", "F#"),
    ("F##", "G"),
    ("G##", "A"),
    ("A##", "B"),
    ("B##", "C#"),
    ("Cbb", "Bb"),
    ("Dbb", "C"),
    ("Ebb", "D"),
    ("Fbb", "Eb"),
    ("Gbb", "F"),
    ("Abb", "G"),
    ("Bbb", "A"),
];

static ALIAS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

static NOTE_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Ga-g])([#b]{0,2})$").expect("note syntax pattern is valid")
});

/// Candidates for `pc`, never empty
pub fn candidates(pc: PitchClass) -> &'static [NoteName] {
    CANDIDATES[pc.value() as usize]
}

/// Validate and canonicalize user input such as " bb", "G##", "f#"
pub fn normalize(input: &str) -> Result<NoteName, SpellingError> {
    let trimmed = input.trim();
    let caps = NOTE_SYNTAX
        .captures(trimmed)
        .ok_or_else(|| SpellingError::InvalidNoteSyntax(input.to_string()))?;

    let base = format!("{}{}", caps[1].to_ascii_uppercase(), &caps[2]);
    let canonical = ALIAS_MAP.get(base.as_str()).copied().unwrap_or(base.as_str());

    // Mixed marks ("C#b") pass the syntax check but name nothing
    let name = NoteName::parse(canonical)
        .ok_or_else(|| SpellingError::UnknownNoteName(canonical.to_string()))?;

    log::debug!("normalize('{}') -> {}", input, name);
    Ok(name)
}

/// Index a canonical name: sharp table first, then flat table
///
/// Names outside both tables (B#, C##, ...) are rejected even though they
/// have a well-defined pitch class; run them through `normalize` first.
pub fn to_pitch_class(name: &NoteName) -> Result<PitchClass, SpellingError> {
    SHARP_NAMES
        .iter()
        .position(|n| n == name)
        .or_else(|| FLAT_NAMES.iter().position(|n| n == name))
        .map(|i| PitchClass::new(i as i32))
        .ok_or_else(|| SpellingError::UnknownNoteName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize(s).unwrap().to_string()
    }

    #[test]
    fn test_normalize_plain_names() {
        assert_eq!(norm("C"), "C");
        assert_eq!(norm("f#"), "F#");
        assert_eq!(norm("bb"), "Bb");
        assert_eq!(norm("  Eb \n"), "Eb");
    }

    #[test]
    fn test_normalize_collapses_aliases() {
        assert_eq!(norm("B#"), "C");
        assert_eq!(norm("cb"), "B");
        assert_eq!(norm("G##"), "A");
        assert_eq!(norm("E##"), "F#");
        assert_eq!(norm("Fbb"), "Eb");
        assert_eq!(normalize("B#"), normalize("C"));
    }

    #[test]
    fn test_normalize_rejects_bad_syntax() {
        for bad in ["H", "C###", "", "  ", "#C", "Cx", "C♯", "CC"] {
            assert!(
                matches!(normalize(bad), Err(SpellingError::InvalidNoteSyntax(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_normalize_mixed_marks_is_unknown_name() {
        assert_eq!(normalize("C#b"), Err(SpellingError::UnknownNoteName("C#b".to_string())));
        assert!(matches!(normalize("Db#"), Err(SpellingError::UnknownNoteName(_))));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "C", "c#", "Db", "D##", "Ebb", "E#", "Fb", "F##", "Gbb", "G#", "ab", "A##", "Bbb", "B#",
        ];
        for input in inputs {
            let once = normalize(input).unwrap();
            let twice = normalize(&once.to_string()).unwrap();
            assert_eq!(once, twice, "{}", input);
        }
    }

    #[test]
    fn test_to_pitch_class_tables() {
        assert_eq!(to_pitch_class(&normalize("C").unwrap()).unwrap().value(), 0);
        assert_eq!(to_pitch_class(&normalize("Db").unwrap()).unwrap().value(), 1);
        assert_eq!(to_pitch_class(&normalize("A#").unwrap()).unwrap().value(), 10);
        assert_eq!(to_pitch_class(&normalize("Cb").unwrap()).unwrap().value(), 11);
    }

    #[test]
    fn test_to_pitch_class_rejects_non_canonical() {
        let b_sharp = NoteName::parse("B#").unwrap();
        assert_eq!(to_pitch_class(&b_sharp), Err(SpellingError::UnknownNoteName("B#".to_string())));
    }

    #[test]
    fn test_every_normalized_name_is_indexable() {
        for letter in ["A", "B", "C", "D", "E", "F", "G"] {
            for acc in ["", "#", "b", "##", "bb"] {
                let name = normalize(&format!("{}{}", letter, acc)).unwrap();
                let pc = to_pitch_class(&name).unwrap();
                assert_eq!(pc, name.pitch_class(), "{}{}", letter, acc);
            }
        }
    }

    #[test]
    fn test_candidates_round_trip() {
        for pc in PitchClass::all() {
            let names = candidates(pc);
            assert!(!names.is_empty() && names.len() <= 2);
            for name in names {
                assert_eq!(name.pitch_class(), pc);
            }
        }
    }
}
