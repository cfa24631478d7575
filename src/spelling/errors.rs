//! Error types for note spelling
//!
//! `InvalidNoteSyntax` and `UnknownNoteName` are user-facing and reported at
//! the API boundary. `UnknownDegreeSymbol` means a mode table names a degree
//! missing from the roman-degree table, which is a bug.

use thiserror::Error;

use crate::models::{Letter, NoteName, PitchClass};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellingError {
    /// Input is not a letter A-G followed by at most two `#`/`b` marks
    #[error("Invalid note syntax: '{0}' (enter a note like C, F#, Bb)")]
    InvalidNoteSyntax(String),

    /// Name is absent from both canonical tables
    #[error("Unrecognized note: '{0}'")]
    UnknownNoteName(String),

    /// Degree symbol is missing from the roman-degree table (internal error)
    #[error("Unknown scale degree symbol: '{0}'")]
    UnknownDegreeSymbol(String),

    /// Strict spelling could not honour the expected letter
    #[error("Cannot spell pitch class {pitch_class} on letter {expected}: resolved to {resolved}")]
    SpellingConstraintUnsatisfiable {
        pitch_class: PitchClass,
        expected: Letter,
        resolved: NoteName,
    },
}

impl SpellingError {
    /// Whether the error stems from user input rather than a programming error
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            SpellingError::InvalidNoteSyntax(_) | SpellingError::UnknownNoteName(_)
        )
    }
}
