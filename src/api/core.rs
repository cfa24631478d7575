//! JavaScript entry points
//!
//! The page calls `normalizeAndIndex` to validate the tonic box and
//! `computeModeResults` to get the five mode cards. Errors are thrown as
//! plain strings; no partial card list is ever returned.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize_or_default, serialize, spelling_error};
use super::types::IndexedNote;
use crate::models::Mode;
use crate::theory::{self, TheorySettings};
use crate::{wasm_info, wasm_log};

/// Validate and canonicalize user-supplied tonic text
///
/// # Returns
/// `{ note: "Bb", pitchClass: 10 }`
#[wasm_bindgen(js_name = normalizeAndIndex)]
pub fn normalize_and_index(raw: &str) -> Result<JsValue, JsValue> {
    wasm_log!("normalizeAndIndex called: raw='{}'", raw);

    let (note, pitch_class) = theory::normalize_and_index(raw).map_err(spelling_error)?;

    serialize(&IndexedNote { note, pitch_class }, "Serialization error")
}

/// Compute the five mode cards for a tonic
///
/// # Parameters
/// - `tonic`: raw tonic text; empty falls back to `settings.defaultTonic`
/// - `settings_js`: optional `{ defaultTonic, strictSpelling }`
///
/// # Returns
/// Array of mode results in the order Dorian, Phrygian, Lydian,
/// Mixolydian, Aeolian
#[wasm_bindgen(js_name = computeModeResults)]
pub fn compute_mode_results(tonic: &str, settings_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("computeModeResults called: tonic='{}'", tonic);

    let settings: TheorySettings = deserialize_or_default(settings_js, "Invalid settings")?;
    wasm_log!("  settings: {:?}", settings);

    let results = theory::mode_results_for_input(tonic, &settings).map_err(spelling_error)?;

    for result in &results {
        wasm_log!("  {}: {}", result.title(), result.scale_text());
    }

    serialize(&results, "Serialization error")
}

/// Mode names in card order
#[wasm_bindgen(js_name = listModes)]
pub fn list_modes() -> js_sys::Array {
    Mode::ALL
        .iter()
        .map(|mode| JsValue::from_str(mode.name()))
        .collect()
}
