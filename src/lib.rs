//! Modal Theory WASM Module
//!
//! Enharmonic spelling engine and modal theory resolver for the mode cards
//! page. Given a tonic, it spells the scale, characteristic note, tonic
//! chord, characteristic chords and avoid harmony of Dorian, Phrygian,
//! Lydian, Mixolydian and Aeolian.

pub mod models;
pub mod spelling;
pub mod theory;
pub mod api;

// Re-export commonly used types
pub use models::{Letter, Mode, ModeResult, NoteName, PitchClass, ResolvedChord};
pub use spelling::SpellingError;
pub use theory::{compute_mode_results, normalize_and_index, TheorySettings};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Modal theory WASM module initialized");
}
