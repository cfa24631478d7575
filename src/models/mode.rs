//! The five modes and their fixed theory tables
//!
//! Everything here encodes music-theory facts rather than computation:
//! interval steps, which degree is characteristic, the spelling bias, the
//! tonic chord quality, the avoid-chord root and the chord lists shown on
//! each card.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::chord::ChordSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    /// Minor with a raised 6th
    Dorian,
    /// Minor with a lowered 2nd
    Phrygian,
    /// Major with a raised 4th
    Lydian,
    /// Major with a lowered 7th
    Mixolydian,
    /// Natural minor
    Aeolian,
}

const DORIAN_CHARACTERISTIC: [ChordSpec; 3] = [
    ChordSpec::new("II", "-7"),
    ChordSpec::new("IV", "7"),
    ChordSpec::emphasized("♭VII", "Maj7"),
];

const PHRYGIAN_CHARACTERISTIC: [ChordSpec; 3] = [
    ChordSpec::new("♭II", "Maj7"),
    ChordSpec::emphasized("♭III", "7"),
    ChordSpec::new("♭VII", "-7"),
];

const LYDIAN_CHARACTERISTIC: [ChordSpec; 3] = [
    ChordSpec::new("II", "7"),
    ChordSpec::emphasized("V", "Maj7"),
    ChordSpec::new("VII", "-7"),
];

const MIXOLYDIAN_CHARACTERISTIC: [ChordSpec; 3] = [
    ChordSpec::emphasized("I", "7"),
    ChordSpec::new("V", "-7"),
    ChordSpec::new("♭VII", "Maj7"),
];

const AEOLIAN_CHARACTERISTIC: [ChordSpec; 3] = [
    ChordSpec::new("IV", "-7"),
    ChordSpec::new("♭VI", "Maj7"),
    ChordSpec::emphasized("♭VII", "7"),
];

const DORIAN_AVOID: [ChordSpec; 3] = [
    ChordSpec::new("I", "-7"),
    ChordSpec::new("IV", "7"),
    ChordSpec::emphasized("♭VII", "Maj7"),
];

const PHRYGIAN_AVOID: [ChordSpec; 3] = [
    ChordSpec::new("♭VII", "-7"),
    ChordSpec::emphasized("♭III", "7"),
    ChordSpec::new("♭VI", "Maj7"),
];

const LYDIAN_AVOID: [ChordSpec; 3] = [
    ChordSpec::emphasized("VI", "-7"),
    ChordSpec::new("II", "7"),
    ChordSpec::new("V", "Maj7"),
];

const MIXOLYDIAN_AVOID: [ChordSpec; 3] = [
    ChordSpec::emphasized("V", "-7"),
    ChordSpec::new("I", "7"),
    ChordSpec::new("IV", "Maj7"),
];

const AEOLIAN_AVOID: [ChordSpec; 3] = [
    ChordSpec::new("IV", "-7"),
    ChordSpec::new("♭VII", "7"),
    ChordSpec::emphasized("♭III", "Maj7"),
];

impl Mode {
    /// Declaration order, which is also card order
    pub const ALL: [Mode; 5] = [
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
        }
    }

    /// Semitones from the tonic to each of the 7 degrees
    pub fn steps(self) -> [u8; 7] {
        match self {
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// 1-based scale degree that gives the mode its colour
    pub fn characteristic_degree(self) -> usize {
        match self {
            Mode::Dorian => 6,
            Mode::Phrygian => 2,
            Mode::Lydian => 4,
            Mode::Mixolydian => 7,
            Mode::Aeolian => 6,
        }
    }

    /// Characteristic degree relative to the parallel major, e.g. "♭2"
    pub fn characteristic_label(self) -> &'static str {
        match self {
            Mode::Dorian => "6",
            Mode::Phrygian => "♭2",
            Mode::Lydian => "#4",
            Mode::Mixolydian => "♭7",
            Mode::Aeolian => "♭6",
        }
    }

    /// Spelling bias for derived notes. A flat tonic overrides this.
    pub fn prefers_flat(self) -> bool {
        match self {
            Mode::Dorian | Mode::Phrygian | Mode::Aeolian => true,
            Mode::Lydian | Mode::Mixolydian => false,
        }
    }

    pub fn tonic_quality(self) -> &'static str {
        match self {
            Mode::Dorian | Mode::Phrygian | Mode::Aeolian => "-7",
            Mode::Lydian => "Maj7",
            Mode::Mixolydian => "7",
        }
    }

    /// Root of the half-diminished chord that undermines the mode
    pub fn avoid_degree(self) -> &'static str {
        match self {
            Mode::Dorian => "VI",
            Mode::Phrygian => "V",
            Mode::Lydian => "#IV",
            Mode::Mixolydian => "III",
            Mode::Aeolian => "II",
        }
    }

    pub fn characteristic_chords(self) -> &'static [ChordSpec] {
        match self {
            Mode::Dorian => &DORIAN_CHARACTERISTIC,
            Mode::Phrygian => &PHRYGIAN_CHARACTERISTIC,
            Mode::Lydian => &LYDIAN_CHARACTERISTIC,
            Mode::Mixolydian => &MIXOLYDIAN_CHARACTERISTIC,
            Mode::Aeolian => &AEOLIAN_CHARACTERISTIC,
        }
    }

    pub fn avoid_progression(self) -> &'static [ChordSpec] {
        match self {
            Mode::Dorian => &DORIAN_AVOID,
            Mode::Phrygian => &PHRYGIAN_AVOID,
            Mode::Lydian => &LYDIAN_AVOID,
            Mode::Mixolydian => &MIXOLYDIAN_AVOID,
            Mode::Aeolian => &AEOLIAN_AVOID,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid mode: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roman_degree::RomanDegree;

    #[test]
    fn test_every_table_symbol_is_a_known_degree() {
        for mode in Mode::ALL {
            assert!(RomanDegree::lookup(mode.avoid_degree()).is_some(), "{}", mode);
            for chord in mode.characteristic_chords().iter().chain(mode.avoid_progression()) {
                assert!(RomanDegree::lookup(chord.degree).is_some(), "{} {}", mode, chord.degree);
            }
        }
    }

    #[test]
    fn test_exactly_one_emphasized_chord_per_list() {
        for mode in Mode::ALL {
            assert_eq!(mode.characteristic_chords().iter().filter(|c| c.emphasized).count(), 1);
            assert_eq!(mode.avoid_progression().iter().filter(|c| c.emphasized).count(), 1);
        }
    }

    #[test]
    fn test_steps_are_ascending_from_tonic() {
        for mode in Mode::ALL {
            let steps = mode.steps();
            assert_eq!(steps[0], 0);
            assert!(steps.windows(2).all(|w| w[0] < w[1] && w[1] - w[0] <= 2), "{}", mode);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("lydian".parse::<Mode>(), Ok(Mode::Lydian));
        assert_eq!(" Aeolian ".parse::<Mode>(), Ok(Mode::Aeolian));
        assert!("Locrian".parse::<Mode>().is_err());
    }
}
