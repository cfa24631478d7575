//! Settings passed from the page to the theory resolver

use serde::{Deserialize, Serialize};

use crate::spelling::SpellingPolicy;

/// Resolver settings
///
/// Every field has a default, so the page may pass `{}`, a partial object,
/// or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TheorySettings {
    /// Tonic used when the input box is empty
    pub default_tonic: String,

    /// Report notes that cannot keep their diatonic letter instead of
    /// silently respelling them
    pub strict_spelling: bool,
}

impl TheorySettings {
    pub fn policy(&self) -> SpellingPolicy {
        if self.strict_spelling {
            SpellingPolicy::Strict
        } else {
            SpellingPolicy::BestEffort
        }
    }
}

impl Default for TheorySettings {
    fn default() -> Self {
        Self {
            default_tonic: "C".to_string(),
            strict_spelling: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: TheorySettings = serde_json::from_str(r#"{"strictSpelling": true}"#).unwrap();
        assert_eq!(settings.default_tonic, "C");
        assert_eq!(settings.policy(), SpellingPolicy::Strict);

        let settings: TheorySettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, TheorySettings::default());
        assert_eq!(settings.policy(), SpellingPolicy::BestEffort);
    }
}
