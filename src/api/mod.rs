//! Modal Theory WASM API
//!
//! The JavaScript-facing surface of the crate. The card page owns all
//! rendering and input plumbing; it only calls the functions below.
//!
//! - `helpers`: console logging macros, serialization, error conversion
//! - `types`: API-only result types
//! - `core`: the exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::{compute_mode_results, list_modes, normalize_and_index};
