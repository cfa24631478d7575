//! Spelling resolver: choose one name for a pitch class
//!
//! Rule order (first match wins):
//! 1. an explicitly requested accidental (from a `♭`/`#` degree symbol)
//! 2. the expected letter, so scales and chord sets never skip or repeat
//!    a letter; spelled directly on that letter when the table has no
//!    candidate for it (B# in F# Lydian)
//! 3. the flat/sharp bias
//! 4. the first table candidate

use super::enharmonic::candidates;
use super::errors::SpellingError;
use crate::models::{Letter, NoteName, PitchClass, RequestedAccidental};

/// Inputs that disambiguate a spelling; built per lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpellingContext {
    pub expected_letter: Option<Letter>,
    pub prefer_flat: bool,
    pub requested_accidental: Option<RequestedAccidental>,
}

impl SpellingContext {
    pub fn new(prefer_flat: bool) -> Self {
        SpellingContext {
            prefer_flat,
            ..Default::default()
        }
    }

    pub fn with_expected_letter(mut self, letter: Letter) -> Self {
        self.expected_letter = Some(letter);
        self
    }

    pub fn with_requested_accidental(mut self, accidental: Option<RequestedAccidental>) -> Self {
        self.requested_accidental = accidental;
        self
    }
}

/// What to do when the expected letter cannot be honoured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpellingPolicy {
    /// Return the best remaining candidate
    #[default]
    BestEffort,
    /// Report `SpellingConstraintUnsatisfiable`
    Strict,
}

/// Which resolver rule produced a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingRule {
    RequestedAccidental,
    ExpectedLetter,
    Bias,
    FirstCandidate,
}

/// Pick the name for `pc`. Total: always returns a name of that pitch class.
pub fn resolve_name(pc: PitchClass, ctx: &SpellingContext) -> NoteName {
    resolve_with_rule(pc, ctx).0
}

/// `resolve_name`, also reporting the rule that matched
pub fn resolve_with_rule(pc: PitchClass, ctx: &SpellingContext) -> (NoteName, SpellingRule) {
    let names = candidates(pc);

    if let Some(requested) = ctx.requested_accidental {
        if let Some(name) = names.iter().find(|n| requested.is_carried_by(n)) {
            return (*name, SpellingRule::RequestedAccidental);
        }
    }

    if let Some(letter) = ctx.expected_letter {
        if let Some(name) = names.iter().find(|n| n.letter() == letter) {
            return (*name, SpellingRule::ExpectedLetter);
        }
        if let Some(name) = NoteName::on_letter(letter, pc) {
            return (name, SpellingRule::ExpectedLetter);
        }
        log::warn!(
            "pitch class {} cannot be spelled on {}, falling back to bias",
            pc,
            letter
        );
    }

    let biased = if ctx.prefer_flat {
        names.iter().find(|n| n.has_flat())
    } else {
        names.iter().find(|n| n.has_sharp())
    };

    match biased {
        Some(name) => (*name, SpellingRule::Bias),
        None => (names[0], SpellingRule::FirstCandidate),
    }
}

/// `resolve_name`, optionally rejecting results that miss the expected letter
///
/// Only a failed expected-letter match is reported. A requested accidental
/// that wins over the letter (`♭VII` as `Gb` above G#) is the intended
/// spelling, and one the pitch class cannot carry is never reported either.
pub fn spell(
    pc: PitchClass,
    ctx: &SpellingContext,
    policy: SpellingPolicy,
) -> Result<NoteName, SpellingError> {
    let (name, rule) = resolve_with_rule(pc, ctx);
    match (policy, ctx.expected_letter, rule) {
        (
            SpellingPolicy::Strict,
            Some(expected),
            SpellingRule::Bias | SpellingRule::FirstCandidate,
        ) => Err(SpellingError::SpellingConstraintUnsatisfiable {
            pitch_class: pc,
            expected,
            resolved: name,
        }),
        _ => Ok(name),
    }
}
