//! Modal theory resolver and its settings

pub mod settings;
pub mod modal;

pub use settings::TheorySettings;
pub use modal::{
    compute_mode_result, compute_mode_results, compute_mode_results_with, mode_results_for_input,
    normalize_and_index, prefers_flat,
};
