use itertools::Itertools;
use serde::Serialize;

use crate::font::{FontFamily, FontSettings};
use crate::mode::Mode;
use crate::profile::SensitivityProfile;

const BASE_WEIGHT: u16 = 400;
const HEAVY_WEIGHT: u16 = 600;
const WIDE_WORD_SPACING_PX: u8 = 4;
const REDUCED_CONTRAST: &str = "contrast(0.85)";

/// Flat, renderer-agnostic style directives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub font_family: FontFamily,
    pub font_size_percent: u32,
    pub letter_spacing_em: f64,
    pub line_height: f64,
    pub word_spacing_px: u8,
    pub font_weight: u16,
    pub contrast_filter: Option<String>,
    pub highlight_patterns: bool,
    pub simplify_words: bool,
}

/// Text directives a mode imposes on its own.
struct TextPreset {
    word_spacing_px: u8,
    font_weight: u16,
    contrast_filter: Option<&'static str>,
    highlight_patterns: bool,
    simplify_words: bool,
}

fn preset_for(mode: Mode, profile: &SensitivityProfile) -> TextPreset {
    match mode {
        Mode::Default => TextPreset {
            word_spacing_px: 0,
            font_weight: BASE_WEIGHT,
            contrast_filter: None,
            highlight_patterns: false,
            simplify_words: false,
        },
        Mode::Dyslexia => TextPreset {
            word_spacing_px: WIDE_WORD_SPACING_PX,
            font_weight: BASE_WEIGHT,
            contrast_filter: None,
            highlight_patterns: true,
            simplify_words: false,
        },
        Mode::Adhd => TextPreset {
            word_spacing_px: 2,
            font_weight: BASE_WEIGHT,
            contrast_filter: Some("contrast(0.9)"),
            highlight_patterns: false,
            simplify_words: true,
        },
        // Only adaptive mode reads the learner's own toggles.
        Mode::Adaptive => TextPreset {
            word_spacing_px: if profile.word_spacing { WIDE_WORD_SPACING_PX } else { 0 },
            font_weight: if profile.font_weight { HEAVY_WEIGHT } else { BASE_WEIGHT },
            contrast_filter: profile.contrast.then_some(REDUCED_CONTRAST),
            highlight_patterns: profile.text_patterns,
            simplify_words: profile.word_replacement,
        },
    }
}

/// Compute the style directives for a mode, profile and font settings.
/// Pure: equal inputs give equal descriptors. Font values are clamped to
/// their domains first, whatever the caller passes in.
pub fn derive_style_descriptor(
    profile: &SensitivityProfile,
    font: &FontSettings,
    mode: Mode,
) -> StyleDescriptor {
    let font = font.clamped();
    let preset = preset_for(mode, profile);
    StyleDescriptor {
        font_family: font.font_family,
        font_size_percent: font.font_size,
        letter_spacing_em: font.letter_spacing,
        line_height: font.line_height,
        word_spacing_px: preset.word_spacing_px,
        font_weight: preset.font_weight,
        contrast_filter: preset.contrast_filter.map(str::to_string),
        highlight_patterns: preset.highlight_patterns,
        simplify_words: preset.simplify_words,
    }
}

impl StyleDescriptor {
    /// Render as inline CSS declarations.
    pub fn css(&self) -> String {
        let mut decls = vec![
            format!("font-family: \"{}\"", self.font_family.css_name()),
            format!("font-size: {}%", self.font_size_percent),
            format!("letter-spacing: {}em", self.letter_spacing_em),
            format!("line-height: {}", self.line_height),
            format!("word-spacing: {}px", self.word_spacing_px),
            format!("font-weight: {}", self.font_weight),
        ];
        if let Some(filter) = &self.contrast_filter {
            decls.push(format!("filter: {filter}"));
        }
        decls.iter().map(|d| format!("{d};")).join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_mode_is_plain() {
        let d = derive_style_descriptor(
            &SensitivityProfile::default(),
            &FontSettings::default(),
            Mode::Default,
        );
        assert_eq!(
            d,
            StyleDescriptor {
                font_family: FontFamily::Arial,
                font_size_percent: 100,
                letter_spacing_em: 0.05,
                line_height: 1.6,
                word_spacing_px: 0,
                font_weight: 400,
                contrast_filter: None,
                highlight_patterns: false,
                simplify_words: false,
            }
        );
    }

    #[test]
    fn profile_only_applies_in_adaptive_mode() {
        let profile = SensitivityProfile {
            font_weight: true,
            contrast: true,
            word_replacement: true,
            ..Default::default()
        };
        let font = FontSettings::default();

        let adaptive = derive_style_descriptor(&profile, &font, Mode::Adaptive);
        assert_eq!(adaptive.font_weight, 600);
        assert_eq!(adaptive.contrast_filter.as_deref(), Some("contrast(0.85)"));
        assert!(adaptive.simplify_words);
        assert!(!adaptive.highlight_patterns);
        assert_eq!(adaptive.word_spacing_px, 0);

        let plain = derive_style_descriptor(&profile, &font, Mode::Default);
        assert_eq!(plain.font_weight, 400);
        assert!(plain.contrast_filter.is_none());
    }

    #[test]
    fn dyslexia_highlights_and_spaces() {
        let d = derive_style_descriptor(
            &SensitivityProfile::default(),
            &FontSettings::default(),
            Mode::Dyslexia,
        );
        assert!(d.highlight_patterns);
        assert_eq!(d.word_spacing_px, 4);
    }

    #[test]
    fn out_of_domain_font_is_clamped_before_rendering() {
        let font = FontSettings {
            font_size: 999,
            letter_spacing: 3.0,
            line_height: 0.1,
            font_family: FontFamily::Verdana,
        };
        let d = derive_style_descriptor(&SensitivityProfile::default(), &font, Mode::Default);
        assert_eq!(d.font_size_percent, 150);
        assert_eq!(d.letter_spacing_em, 0.2);
        assert_eq!(d.line_height, 1.0);
        assert_eq!(d.font_family, FontFamily::Verdana);
    }

    #[test]
    fn css_lists_filter_only_when_set() {
        let font = FontSettings::default();
        let plain = derive_style_descriptor(&SensitivityProfile::default(), &font, Mode::Default);
        assert_eq!(
            plain.css(),
            "font-family: \"Arial\"; font-size: 100%; letter-spacing: 0.05em; \
             line-height: 1.6; word-spacing: 0px; font-weight: 400;"
        );
        let adhd = derive_style_descriptor(&SensitivityProfile::default(), &font, Mode::Adhd);
        assert!(adhd.css().ends_with("filter: contrast(0.9);"));
    }
}
