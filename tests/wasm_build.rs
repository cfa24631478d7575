//! WASM build test
//!
//! Exercises the JavaScript entry points in a browser.

#![cfg(target_arch = "wasm32")]

use modal_theory_wasm::api;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_normalize_and_index_returns_note_and_index() {
    let value = api::normalize_and_index("bb").unwrap();
    let note = js_sys::Reflect::get(&value, &JsValue::from_str("note")).unwrap();
    let pc = js_sys::Reflect::get(&value, &JsValue::from_str("pitchClass")).unwrap();
    assert_eq!(note.as_string().as_deref(), Some("Bb"));
    assert_eq!(pc.as_f64(), Some(10.0));
}

#[wasm_bindgen_test]
fn test_normalize_and_index_rejects_bad_input() {
    let err = api::normalize_and_index("H").unwrap_err();
    assert!(err.as_string().unwrap().contains("Invalid note syntax"));
}

#[wasm_bindgen_test]
fn test_compute_mode_results_without_settings() {
    let value = api::compute_mode_results("", JsValue::UNDEFINED).unwrap();
    let cards = js_sys::Array::from(&value);
    assert_eq!(cards.length(), 5);

    let first = cards.get(0);
    let title = js_sys::Reflect::get(&first, &JsValue::from_str("tonicChord")).unwrap();
    assert_eq!(title.as_string().as_deref(), Some("C-7"));
}

#[wasm_bindgen_test]
fn test_list_modes() {
    let modes = api::list_modes();
    assert_eq!(modes.length(), 5);
    assert_eq!(modes.get(2).as_string().as_deref(), Some("Lydian"));
}
