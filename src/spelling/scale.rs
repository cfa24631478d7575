//! Scale builder: spell a mode's seven degrees from a tonic

use super::errors::SpellingError;
use super::resolver::{spell, SpellingContext, SpellingPolicy};
use crate::models::{Letter, Mode, NoteName};

/// Spell the seven degrees of `mode` starting at `tonic`
///
/// The letters of the result are exactly the diatonic sequence starting at
/// the tonic's letter, each used once, however many accidentals that takes.
pub fn build_scale(
    tonic: NoteName,
    mode: Mode,
    prefer_flat: bool,
    policy: SpellingPolicy,
) -> Result<[NoteName; 7], SpellingError> {
    let tonic_pc = tonic.pitch_class();
    let letters = Letter::sequence_from(tonic.letter());

    let mut scale = [tonic; 7];
    for (i, (&step, &letter)) in mode.steps().iter().zip(letters.iter()).enumerate() {
        let ctx = SpellingContext::new(prefer_flat).with_expected_letter(letter);
        scale[i] = spell(tonic_pc.transpose(step as i32), &ctx, policy)?;
    }

    log::debug!("{} {} scale: {:?}", tonic, mode, scale.map(|n| n.to_string()));
    Ok(scale)
}
