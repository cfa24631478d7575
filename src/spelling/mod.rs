//! Enharmonic spelling engine
//!
//! Turns pitch classes into note names in a diatonic context: the pitch
//! model and normalizer, the spelling resolver, and the scale and
//! roman-degree builders on top of it.

pub mod errors;
pub mod enharmonic;
pub mod resolver;
pub mod scale;
pub mod roman;

pub use errors::SpellingError;
pub use enharmonic::{normalize, to_pitch_class};
pub use resolver::{resolve_name, resolve_with_rule, spell, SpellingContext, SpellingPolicy, SpellingRule};
pub use scale::build_scale;
pub use roman::resolve_degree;
