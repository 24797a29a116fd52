use serde::{Deserialize, Serialize};

/// Independent reading-support toggles. No combination is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensitivityProfile {
    /// Highlight difficult word patterns.
    pub text_patterns: bool,
    /// Substitute complex words with simpler synonyms.
    pub word_replacement: bool,
    /// Reduce visual contrast.
    pub contrast: bool,
    /// Increase spacing between words.
    pub word_spacing: bool,
    /// Increase font weight.
    pub font_weight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitivityFlag {
    TextPatterns,
    WordReplacement,
    Contrast,
    WordSpacing,
    FontWeight,
}

impl SensitivityFlag {
    pub fn all() -> &'static [SensitivityFlag] {
        &[
            SensitivityFlag::TextPatterns,
            SensitivityFlag::WordReplacement,
            SensitivityFlag::Contrast,
            SensitivityFlag::WordSpacing,
            SensitivityFlag::FontWeight,
        ]
    }

    /// Key used by the checkbox controls.
    pub fn key(&self) -> &'static str {
        match self {
            SensitivityFlag::TextPatterns => "textPatterns",
            SensitivityFlag::WordReplacement => "wordReplacement",
            SensitivityFlag::Contrast => "contrast",
            SensitivityFlag::WordSpacing => "wordSpacing",
            SensitivityFlag::FontWeight => "fontWeight",
        }
    }

    /// Exact match on the control key; anything else is unrecognized.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.key() == key)
    }
}

impl SensitivityProfile {
    pub fn get(&self, flag: SensitivityFlag) -> bool {
        match flag {
            SensitivityFlag::TextPatterns => self.text_patterns,
            SensitivityFlag::WordReplacement => self.word_replacement,
            SensitivityFlag::Contrast => self.contrast,
            SensitivityFlag::WordSpacing => self.word_spacing,
            SensitivityFlag::FontWeight => self.font_weight,
        }
    }

    pub fn set(&mut self, flag: SensitivityFlag, value: bool) {
        let slot = match flag {
            SensitivityFlag::TextPatterns => &mut self.text_patterns,
            SensitivityFlag::WordReplacement => &mut self.word_replacement,
            SensitivityFlag::Contrast => &mut self.contrast,
            SensitivityFlag::WordSpacing => &mut self.word_spacing,
            SensitivityFlag::FontWeight => &mut self.font_weight,
        };
        *slot = value;
    }
}
