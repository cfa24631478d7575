//! Roman degree resolver: `♭VII` relative to a tonic → a spelled note

use super::errors::SpellingError;
use super::resolver::{spell, SpellingContext, SpellingPolicy};
use crate::models::{NoteName, RomanDegree};

/// Spell the root of `symbol` above `tonic`
///
/// The expected letter comes from the tonic's letter sequence, and a
/// `♭`/`#` prefix on the symbol requests that accidental explicitly.
pub fn resolve_degree(
    tonic: NoteName,
    symbol: &str,
    prefer_flat: bool,
    policy: SpellingPolicy,
) -> Result<NoteName, SpellingError> {
    let degree = RomanDegree::lookup(symbol)
        .ok_or_else(|| SpellingError::UnknownDegreeSymbol(symbol.to_string()))?;

    let target = tonic.pitch_class().transpose(degree.semitones as i32);
    let ctx = SpellingContext::new(prefer_flat)
        .with_expected_letter(tonic.letter().offset(degree.letter_offset))
        .with_requested_accidental(degree.requested_accidental());

    spell(target, &ctx, policy)
}
