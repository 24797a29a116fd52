use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::A11yError;

pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 80..=150;
pub const LETTER_SPACING_RANGE: RangeInclusive<f64> = 0.0..=0.2;
pub const LINE_HEIGHT_RANGE: RangeInclusive<f64> = 1.0..=2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    OpenDyslexic,
    #[serde(rename = "Comic Sans MS")]
    ComicSansMs,
    Verdana,
}

impl FontFamily {
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Arial,
            FontFamily::OpenDyslexic,
            FontFamily::ComicSansMs,
            FontFamily::Verdana,
        ]
    }

    pub fn css_name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::OpenDyslexic => "OpenDyslexic",
            FontFamily::ComicSansMs => "Comic Sans MS",
            FontFamily::Verdana => "Verdana",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for FontFamily {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FontFamily::all()
            .iter()
            .copied()
            .find(|f| f.css_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| A11yError::UnknownFontFamily(s.to_string()))
    }
}

/// Presentation parameters for rendered text. Values are always inside
/// their domain once they have gone through [`FontSettings::merged`] or
/// [`FontSettings::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    /// Percent of the base size.
    pub font_size: u32,
    /// In `em`.
    pub letter_spacing: f64,
    pub line_height: f64,
    pub font_family: FontFamily,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            font_size: 100,
            letter_spacing: 0.05,
            line_height: 1.6,
            font_family: FontFamily::Arial,
        }
    }
}

/// A partial update coming from the font panel. Numeric fields are wide
/// enough to carry out-of-range input; clamping happens on merge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSettingsPatch {
    pub font_size: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub line_height: Option<f64>,
    pub font_family: Option<FontFamily>,
}

impl FontSettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set one field from its textual form. Unknown keys and unparsable
    /// values leave the patch untouched and return `false`.
    pub fn set_field(&mut self, key: &str, raw: &str) -> bool {
        let raw = raw.trim();
        let applied = match key {
            "fontSize" => raw.parse::<f64>().map(|v| self.font_size = Some(v)).is_ok(),
            "letterSpacing" => raw
                .parse::<f64>()
                .map(|v| self.letter_spacing = Some(v))
                .is_ok(),
            "lineHeight" => raw.parse::<f64>().map(|v| self.line_height = Some(v)).is_ok(),
            "fontFamily" => raw
                .parse::<FontFamily>()
                .map(|v| self.font_family = Some(v))
                .is_ok(),
            _ => false,
        };
        if !applied {
            tracing::warn!(key, value = raw, "ignoring font setting");
        }
        applied
    }
}

// NaN carries no usable intent, so the prior value stands.
fn clamp_size(v: f64, prior: u32) -> u32 {
    if v.is_nan() {
        return prior;
    }
    let (lo, hi) = (*FONT_SIZE_RANGE.start() as f64, *FONT_SIZE_RANGE.end() as f64);
    v.round().clamp(lo, hi) as u32
}

fn clamp_float(v: f64, prior: f64, range: &RangeInclusive<f64>) -> f64 {
    if v.is_nan() {
        prior
    } else {
        v.clamp(*range.start(), *range.end())
    }
}

impl FontSettings {
    /// Overlay `patch` on these settings, saturating every provided field
    /// to its domain. Unspecified fields keep their current value.
    pub fn merged(&self, patch: &FontSettingsPatch) -> FontSettings {
        FontSettings {
            font_size: patch
                .font_size
                .map(|v| clamp_size(v, self.font_size))
                .unwrap_or(self.font_size),
            letter_spacing: patch
                .letter_spacing
                .map(|v| clamp_float(v, self.letter_spacing, &LETTER_SPACING_RANGE))
                .unwrap_or(self.letter_spacing),
            line_height: patch
                .line_height
                .map(|v| clamp_float(v, self.line_height, &LINE_HEIGHT_RANGE))
                .unwrap_or(self.line_height),
            font_family: patch.font_family.unwrap_or(self.font_family),
        }
    }

    /// These settings as a patch that sets every field.
    pub fn to_patch(&self) -> FontSettingsPatch {
        FontSettingsPatch {
            font_size: Some(self.font_size as f64),
            letter_spacing: Some(self.letter_spacing),
            line_height: Some(self.line_height),
            font_family: Some(self.font_family),
        }
    }

    /// The same settings forced into their domains. A NaN field falls back
    /// to its default.
    pub fn clamped(&self) -> FontSettings {
        FontSettings::default().merged(&self.to_patch())
    }
}
