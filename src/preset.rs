use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::ProfileEngine;
use crate::errors::Result;
use crate::font::FontSettingsPatch;
use crate::mode::Mode;
use crate::profile::{SensitivityFlag, SensitivityProfile};

/// Starting state for a reading session, read from JSON.
///
/// ```json
/// { "mode": "adaptive", "profile": { "textPatterns": true }, "font": { "fontSize": 120 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPreset {
    pub mode: Option<Mode>,
    pub profile: Option<SensitivityProfile>,
    pub font: FontSettingsPatch,
}

impl SessionPreset {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let preset = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "loaded session preset");
        Ok(preset)
    }

    /// Replay the preset through the engine's own operations.
    pub fn apply_to(&self, engine: &mut ProfileEngine) {
        if let Some(mode) = self.mode {
            engine.set_mode(mode);
        }
        if let Some(profile) = &self.profile {
            for flag in SensitivityFlag::all() {
                engine.set_flag(*flag, profile.get(*flag));
            }
        }
        if !self.font.is_empty() {
            engine.apply_font_settings(&self.font);
        }
    }
}
