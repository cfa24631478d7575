//! Chord specifications and their resolved form

use serde::Serialize;

use super::note::NoteName;

/// Quality label used for every avoid chord
pub const AVOID_CHORD_QUALITY: &str = "-7(♭5)";

/// A chord written relative to the tonic, e.g. `♭VII Maj7`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordSpec {
    pub degree: &'static str,
    pub quality: &'static str,
    /// The mode's strongest characteristic chord, shown with an asterisk
    pub emphasized: bool,
}

impl ChordSpec {
    pub const fn new(degree: &'static str, quality: &'static str) -> Self {
        ChordSpec { degree, quality, emphasized: false }
    }

    pub const fn emphasized(degree: &'static str, quality: &'static str) -> Self {
        ChordSpec { degree, quality, emphasized: true }
    }
}

/// A `ChordSpec` resolved against a tonic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChord {
    pub degree: &'static str,
    pub quality: &'static str,
    pub emphasized: bool,
    pub root: NoteName,
    /// "<root> <quality>", e.g. "Bb Maj7"
    pub name: String,
}

impl ResolvedChord {
    pub fn new(spec: &ChordSpec, root: NoteName) -> Self {
        ResolvedChord {
            degree: spec.degree,
            quality: spec.quality,
            emphasized: spec.emphasized,
            root,
            name: format!("{} {}", root, spec.quality),
        }
    }

    /// Degree symbol with the emphasis marker, e.g. "♭VII*"
    pub fn degree_label(&self) -> String {
        if self.emphasized {
            format!("{}*", self.degree)
        } else {
            self.degree.to_string()
        }
    }
}
