//! Note spelling primitives
//!
//! A `NoteName` is a letter (A-G) plus an accidental of at most two marks.
//! Many names share one `PitchClass`; picking between them is the job of
//! the spelling resolver.

use serde::{Serialize, Serializer};
use std::fmt;

/// One of the 12 equal-tempered pitch classes, 0 = C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const COUNT: u8 = 12;

    /// Wraps any integer into 0..=11
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(Self::COUNT as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Iterate C, C#, D ... B
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..Self::COUNT).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The seven letter names of the musical alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// Alphabet order, starting from A
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 6,
        }
    }

    /// Pitch class of the unaltered letter
    pub fn natural_pitch_class(self) -> PitchClass {
        let pc = match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        };
        PitchClass::new(pc)
    }

    /// Case-insensitive
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }

    /// Letter `steps` positions further up the alphabet, wrapping G -> A
    pub fn offset(self, steps: usize) -> Letter {
        Letter::ALL[(self.index() + steps) % 7]
    }

    /// The 7-letter diatonic sequence starting at `start`
    ///
    /// Example: `C` → C D E F G A B, `A` → A B C D E F G
    pub fn sequence_from(start: Letter) -> [Letter; 7] {
        let mut seq = Letter::ALL;
        seq.rotate_left(start.index());
        seq
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental attached to a letter, limited to double sharp/flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone offset from the natural letter
    pub fn semitones(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn from_semitones(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// ASCII marks as typed by users: "bb", "b", "", "#", "##"
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Inverse of `symbol`. Mixed marks such as "#b" are rejected.
    pub fn from_symbol(symbol: &str) -> Option<Accidental> {
        match symbol {
            "bb" => Some(Accidental::DoubleFlat),
            "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "##" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    pub fn is_flat(self) -> bool {
        matches!(self, Accidental::Flat | Accidental::DoubleFlat)
    }

    pub fn is_sharp(self) -> bool {
        matches!(self, Accidental::Sharp | Accidental::DoubleSharp)
    }
}

/// Explicit accidental requested by a spelling context (e.g. from `♭VII`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestedAccidental {
    Sharp,
    Flat,
}

impl RequestedAccidental {
    /// Whether `name` carries this accidental mark
    pub fn is_carried_by(self, name: &NoteName) -> bool {
        match self {
            RequestedAccidental::Sharp => name.accidental().is_sharp(),
            RequestedAccidental::Flat => name.accidental().is_flat(),
        }
    }
}

/// A spelled note: letter plus accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    letter: Letter,
    accidental: Accidental,
}

impl NoteName {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        NoteName { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        NoteName::new(letter, Accidental::Natural)
    }

    /// Spell `pc` on `letter`, if that takes no more than a double accidental
    ///
    /// `on_letter(B, 0)` is `B#`, `on_letter(A, 7)` is `Abb`,
    /// `on_letter(F, 0)` is `None`.
    pub fn on_letter(letter: Letter, pc: PitchClass) -> Option<NoteName> {
        let mut offset = pc.value() as i32 - letter.natural_pitch_class().value() as i32;
        if offset > 6 {
            offset -= 12;
        } else if offset < -6 {
            offset += 12;
        }
        Accidental::from_semitones(offset).map(|accidental| NoteName::new(letter, accidental))
    }

    /// Parse an exact display name such as "Eb" or "F##"
    ///
    /// The letter must be upper case; use the enharmonic normalizer for
    /// user input.
    pub fn parse(s: &str) -> Option<NoteName> {
        let mut chars = s.chars();
        let first = chars.next()?;
        if !first.is_ascii_uppercase() {
            return None;
        }
        let letter = Letter::from_char(first)?;
        let accidental = Accidental::from_symbol(chars.as_str())?;
        Some(NoteName::new(letter, accidental))
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn has_flat(&self) -> bool {
        self.accidental.is_flat()
    }

    pub fn has_sharp(&self) -> bool {
        self.accidental.is_sharp()
    }

    /// Pitch class by arithmetic, valid for every spelling
    pub fn pitch_class(&self) -> PitchClass {
        self.letter
            .natural_pitch_class()
            .transpose(self.accidental.semitones())
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.symbol())
    }
}

impl Serialize for NoteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::new(12).value(), 0);
        assert_eq!(PitchClass::new(-1).value(), 11);
        assert_eq!(PitchClass::new(9).transpose(5).value(), 2);
        assert_eq!(PitchClass::all().count(), 12);
    }

    #[test]
    fn test_letter_sequence_from_c() {
        use Letter::*;
        assert_eq!(Letter::sequence_from(C), [C, D, E, F, G, A, B]);
        assert_eq!(Letter::sequence_from(G), [G, A, B, C, D, E, F]);
        assert_eq!(Letter::sequence_from(A), Letter::ALL);
    }

    #[test]
    fn test_letter_sequence_has_no_repeats() {
        for start in Letter::ALL {
            let seq = Letter::sequence_from(start);
            assert_eq!(seq[0], start);
            for letter in Letter::ALL {
                assert_eq!(seq.iter().filter(|&&l| l == letter).count(), 1);
            }
        }
    }

    #[test]
    fn test_on_letter() {
        assert_eq!(NoteName::on_letter(Letter::B, PitchClass::new(0)).unwrap().to_string(), "B#");
        assert_eq!(NoteName::on_letter(Letter::A, PitchClass::new(7)).unwrap().to_string(), "Abb");
        assert_eq!(NoteName::on_letter(Letter::C, PitchClass::new(11)).unwrap().to_string(), "Cb");
        assert_eq!(NoteName::on_letter(Letter::E, PitchClass::new(4)).unwrap().to_string(), "E");
        assert!(NoteName::on_letter(Letter::F, PitchClass::new(0)).is_none());
    }

    #[test]
    fn test_parse_display_names() {
        assert_eq!(NoteName::parse("Eb"), Some(NoteName::new(Letter::E, Accidental::Flat)));
        assert_eq!(NoteName::parse("F##"), Some(NoteName::new(Letter::F, Accidental::DoubleSharp)));
        assert_eq!(NoteName::parse("bb"), None);
        assert_eq!(NoteName::parse("C#b"), None);
        assert_eq!(NoteName::parse(""), None);
    }

    #[test]
    fn test_pitch_class_of_spellings() {
        assert_eq!(NoteName::parse("B#").unwrap().pitch_class().value(), 0);
        assert_eq!(NoteName::parse("Cb").unwrap().pitch_class().value(), 11);
        assert_eq!(NoteName::parse("Fbb").unwrap().pitch_class().value(), 3);
        assert_eq!(NoteName::parse("G##").unwrap().pitch_class().value(), 9);
    }

    #[test]
    fn test_pitch_class_serializes_as_wrapped_number() {
        assert_eq!(serde_json::to_string(&PitchClass::new(14)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&PitchClass::new(-3)).unwrap(), "9");
    }

    #[test]
    fn test_note_name_serializes_as_string() {
        let json = serde_json::to_string(&NoteName::parse("Bb").unwrap()).unwrap();
        assert_eq!(json, "\"Bb\"");
    }
}
