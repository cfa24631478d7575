//! Per-mode output consumed by the card renderer

use serde::Serialize;

use super::chord::ResolvedChord;
use super::mode::Mode;
use super::note::NoteName;

/// Everything one mode card shows for a given tonic
///
/// Built fresh for each request; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResult {
    pub mode: Mode,
    pub tonic: NoteName,
    pub scale: [NoteName; 7],
    /// e.g. "♭2" for Phrygian
    pub characteristic_label: &'static str,
    pub characteristic_note: NoteName,
    /// e.g. "C-7"
    pub tonic_chord: String,
    pub characteristic_chords: Vec<ResolvedChord>,
    pub avoid_degree: &'static str,
    /// e.g. "A -7(♭5)"
    pub avoid_chord: String,
    pub avoid_progression: Vec<ResolvedChord>,
}

impl ModeResult {
    /// Card title, e.g. "C Dorian"
    pub fn title(&self) -> String {
        format!("{} {}", self.tonic, self.mode)
    }

    /// Scale joined with bullets, e.g. "C • D • Eb • F • G • A • Bb"
    pub fn scale_text(&self) -> String {
        self.scale
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
