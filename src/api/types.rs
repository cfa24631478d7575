//! Result types specific to the WASM API

use serde::Serialize;

use crate::models::{NoteName, PitchClass};

/// Canonical tonic returned by `normalizeAndIndex`
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IndexedNote {
    pub note: NoteName,
    pub pitch_class: PitchClass,
}
