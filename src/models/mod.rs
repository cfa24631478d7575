//! Data models for modal theory
//!
//! Note spelling primitives, the roman-degree and mode tables, and the
//! result types handed to the card renderer.

pub mod note;
pub mod roman_degree;
pub mod chord;
pub mod mode;
pub mod mode_result;

// Re-export commonly used types
pub use note::{Accidental, Letter, NoteName, PitchClass, RequestedAccidental};
pub use roman_degree::{RomanDegree, ROMAN_DEGREES};
pub use chord::{ChordSpec, ResolvedChord, AVOID_CHORD_QUALITY};
pub use mode::Mode;
pub use mode_result::ModeResult;
