//! Roman-numeral scale degrees
//!
//! Each degree has a fixed distance from the tonic in semitones and a fixed
//! letter offset in the tonic's diatonic letter sequence. The accidental
//! prefix (`♭` or `#`) tells the spelling resolver which enharmonic to ask for.

use super::note::RequestedAccidental;

/// A scale degree symbol such as `IV` or `♭VII`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanDegree {
    pub symbol: &'static str,
    /// Semitones above the tonic
    pub semitones: u8,
    /// Position in the tonic's letter sequence (0 = tonic letter)
    pub letter_offset: usize,
}

const fn degree(symbol: &'static str, semitones: u8, letter_offset: usize) -> RomanDegree {
    RomanDegree { symbol, semitones, letter_offset }
}

/// Every degree symbol the mode tables use
pub static ROMAN_DEGREES: [RomanDegree; 12] = [
    degree("I", 0, 0),
    degree("II", 2, 1),
    degree("III", 4, 2),
    degree("IV", 5, 3),
    degree("V", 7, 4),
    degree("VI", 9, 5),
    degree("VII", 11, 6),
    degree("♭II", 1, 1),
    degree("♭III", 3, 2),
    degree("♭VI", 8, 5),
    degree("♭VII", 10, 6),
    degree("#IV", 6, 3),
];

impl RomanDegree {
    /// Find a degree by symbol. An ASCII `b` prefix is accepted for `♭`.
    pub fn lookup(symbol: &str) -> Option<&'static RomanDegree> {
        let symbol = symbol.trim();
        if let Some(found) = ROMAN_DEGREES.iter().find(|d| d.symbol == symbol) {
            return Some(found);
        }
        let rest = symbol.strip_prefix('b')?;
        ROMAN_DEGREES
            .iter()
            .find(|d| d.symbol.strip_prefix('♭') == Some(rest))
    }

    /// Accidental carried by the symbol's prefix, if any
    pub fn requested_accidental(&self) -> Option<RequestedAccidental> {
        if self.symbol.starts_with('♭') {
            Some(RequestedAccidental::Flat)
        } else if self.symbol.starts_with('#') {
            Some(RequestedAccidental::Sharp)
        } else {
            None
        }
    }
}
