//! Modal theory resolver
//!
//! Composes the spelling engine per mode: scale, characteristic note, tonic
//! chord, characteristic chords, avoid chord and avoid progression. The
//! characteristic note is read from the spelled scale so both always agree.

use super::settings::TheorySettings;
use crate::models::{
    ChordSpec, Mode, ModeResult, NoteName, PitchClass, ResolvedChord, AVOID_CHORD_QUALITY,
};
use crate::spelling::{
    build_scale, normalize, resolve_degree, to_pitch_class, SpellingError, SpellingPolicy,
};

/// Validate and canonicalize raw tonic text, returning the name and its index
pub fn normalize_and_index(raw: &str) -> Result<(NoteName, PitchClass), SpellingError> {
    let name = normalize(raw)?;
    let pc = to_pitch_class(&name)?;
    Ok((name, pc))
}

/// Flat bias for a mode on a tonic: the mode's own bias, or any flat tonic
pub fn prefers_flat(mode: Mode, tonic: &NoteName) -> bool {
    mode.prefers_flat() || tonic.has_flat()
}

fn resolve_chords(
    tonic: NoteName,
    specs: &[ChordSpec],
    prefer_flat: bool,
    policy: SpellingPolicy,
) -> Result<Vec<ResolvedChord>, SpellingError> {
    specs
        .iter()
        .map(|spec| {
            let root = resolve_degree(tonic, spec.degree, prefer_flat, policy)?;
            Ok(ResolvedChord::new(spec, root))
        })
        .collect()
}

/// Derive one mode card for `tonic`
pub fn compute_mode_result(
    tonic: NoteName,
    mode: Mode,
    settings: &TheorySettings,
) -> Result<ModeResult, SpellingError> {
    let policy = settings.policy();
    let prefer_flat = prefers_flat(mode, &tonic);

    let scale = build_scale(tonic, mode, prefer_flat, policy)?;
    let characteristic_note = scale[mode.characteristic_degree() - 1];

    let avoid_root = resolve_degree(tonic, mode.avoid_degree(), prefer_flat, policy)?;

    Ok(ModeResult {
        mode,
        tonic,
        scale,
        characteristic_label: mode.characteristic_label(),
        characteristic_note,
        tonic_chord: format!("{}{}", tonic, mode.tonic_quality()),
        characteristic_chords: resolve_chords(
            tonic,
            mode.characteristic_chords(),
            prefer_flat,
            policy,
        )?,
        avoid_degree: mode.avoid_degree(),
        avoid_chord: format!("{} {}", avoid_root, AVOID_CHORD_QUALITY),
        avoid_progression: resolve_chords(tonic, mode.avoid_progression(), prefer_flat, policy)?,
    })
}

/// All five mode cards, in declaration order, with default settings
pub fn compute_mode_results(
    tonic: NoteName,
    tonic_pc: PitchClass,
) -> Result<Vec<ModeResult>, SpellingError> {
    compute_mode_results_with(tonic, tonic_pc, &TheorySettings::default())
}

/// All five mode cards, in declaration order
///
/// `tonic_pc` must be the index of `tonic`; a mismatch is reported as
/// `UnknownNoteName` rather than producing cards for the wrong pitch.
pub fn compute_mode_results_with(
    tonic: NoteName,
    tonic_pc: PitchClass,
    settings: &TheorySettings,
) -> Result<Vec<ModeResult>, SpellingError> {
    if tonic.pitch_class() != tonic_pc {
        return Err(SpellingError::UnknownNoteName(format!(
            "{} (indexed as {})",
            tonic, tonic_pc
        )));
    }

    let results = Mode::ALL
        .iter()
        .map(|&mode| compute_mode_result(tonic, mode, settings))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("Computed {} mode cards for {}", results.len(), tonic);
    Ok(results)
}

/// Normalize raw input (empty → configured default tonic) and compute cards
pub fn mode_results_for_input(
    raw: &str,
    settings: &TheorySettings,
) -> Result<Vec<ModeResult>, SpellingError> {
    let raw = if raw.trim().is_empty() {
        settings.default_tonic.as_str()
    } else {
        raw
    };
    let (tonic, pc) = normalize_and_index(raw)?;
    compute_mode_results_with(tonic, pc, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(tonic: &str, mode: Mode) -> ModeResult {
        let (tonic, _) = normalize_and_index(tonic).unwrap();
        compute_mode_result(tonic, mode, &TheorySettings::default()).unwrap()
    }

    #[test]
    fn test_normalize_and_index() {
        let (name, pc) = normalize_and_index(" bb ").unwrap();
        assert_eq!(name.to_string(), "Bb");
        assert_eq!(pc.value(), 10);

        assert!(matches!(normalize_and_index("H"), Err(SpellingError::InvalidNoteSyntax(_))));
        assert!(matches!(normalize_and_index("C###"), Err(SpellingError::InvalidNoteSyntax(_))));
    }

    #[test]
    fn test_flat_tonic_forces_flat_bias() {
        let bb = NoteName::parse("Bb").unwrap();
        for mode in Mode::ALL {
            assert!(prefers_flat(mode, &bb), "{}", mode);
        }
        let fs = NoteName::parse("F#").unwrap();
        assert!(!prefers_flat(Mode::Lydian, &fs));
        assert!(prefers_flat(Mode::Dorian, &fs));
    }

    #[test]
    fn test_characteristic_note_reads_from_scale() {
        for mode in Mode::ALL {
            let result = card("Eb", mode);
            assert_eq!(result.characteristic_note, result.scale[mode.characteristic_degree() - 1]);
        }
    }

    #[test]
    fn test_tonic_chord_labels() {
        assert_eq!(card("C", Mode::Dorian).tonic_chord, "C-7");
        assert_eq!(card("F#", Mode::Lydian).tonic_chord, "F#Maj7");
        assert_eq!(card("Bb", Mode::Mixolydian).tonic_chord, "Bb7");
    }

    #[test]
    fn test_pitch_class_mismatch_is_rejected() {
        let tonic = NoteName::parse("C").unwrap();
        assert!(matches!(
            compute_mode_results(tonic, PitchClass::new(2)),
            Err(SpellingError::UnknownNoteName(_))
        ));
    }

    #[test]
    fn test_empty_input_uses_default_tonic() {
        let results = mode_results_for_input("   ", &TheorySettings::default()).unwrap();
        assert_eq!(results[0].tonic.to_string(), "C");

        let settings = TheorySettings {
            default_tonic: "G".to_string(),
            ..Default::default()
        };
        let results = mode_results_for_input("", &settings).unwrap();
        assert_eq!(results[0].title(), "G Dorian");
    }
}
