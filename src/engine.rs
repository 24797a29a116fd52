use serde::{Deserialize, Serialize};

use crate::capabilities::{ListenerRegistry, SensoryBreakListener};
use crate::font::{FontSettings, FontSettingsPatch};
use crate::mode::Mode;
use crate::profile::{SensitivityFlag, SensitivityProfile};
use crate::style::{derive_style_descriptor, StyleDescriptor};

/// Plain copy of the engine state for display or hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub profile: SensitivityProfile,
    pub font: FontSettings,
}

/// Owns the reading-support state of one session.
///
/// Every mutation goes through the methods below. None of them can fail:
/// numbers are clamped and unknown keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct ProfileEngine {
    mode: Mode,
    profile: SensitivityProfile,
    font: FontSettings,
    listeners: ListenerRegistry,
}

impl ProfileEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing state. The font settings are passed through
    /// the same clamping as [`ProfileEngine::apply_font_settings`].
    pub fn with_state(mode: Mode, profile: SensitivityProfile, font: FontSettings) -> Self {
        let font = font.clamped();
        Self {
            mode,
            profile,
            font,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. The sensitivity profile is left as is, so coming back
    /// to adaptive mode restores the earlier toggles.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "mode changed");
        }
        self.mode = mode;
    }

    pub fn profile(&self) -> &SensitivityProfile {
        &self.profile
    }

    /// Toggle the flag named `field`. Unknown names are a no-op.
    pub fn update_sensitivity_profile(&mut self, field: &str, value: bool) {
        match SensitivityFlag::from_key(field) {
            Some(flag) => self.set_flag(flag, value),
            None => tracing::debug!(field, "ignoring unknown sensitivity field"),
        }
    }

    pub fn set_flag(&mut self, flag: SensitivityFlag, value: bool) {
        tracing::debug!(flag = flag.key(), value, "sensitivity flag set");
        self.profile.set(flag, value);
    }

    pub fn font_settings(&self) -> &FontSettings {
        &self.font
    }

    /// Commit a partial font update, clamped to each field's domain, and
    /// return the resulting settings.
    pub fn apply_font_settings(&mut self, patch: &FontSettingsPatch) -> FontSettings {
        self.font = self.font.merged(patch);
        tracing::debug!(
            font_size = self.font.font_size,
            letter_spacing = self.font.letter_spacing,
            line_height = self.font.line_height,
            font_family = %self.font.font_family,
            "font settings applied"
        );
        self.font
    }

    pub fn subscribe_sensory_break<L: SensoryBreakListener + 'static>(&mut self, listener: L) {
        self.listeners.register(listener);
    }

    /// Signal the view layer to reduce stimulation. Profile and font
    /// settings are untouched.
    pub fn trigger_sensory_break(&self) {
        tracing::info!(mode = %self.mode, listeners = self.listeners.len(), "sensory break");
        self.listeners.dispatch(self.mode);
    }

    pub fn style_descriptor(&self) -> StyleDescriptor {
        derive_style_descriptor(&self.profile, &self.font, self.mode)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            profile: self.profile,
            font: self.font,
        }
    }

    /// Back to a fresh session. Subscribed listeners stay registered.
    pub fn reset(&mut self) {
        self.mode = Mode::default();
        self.profile = SensitivityProfile::default();
        self.font = FontSettings::default();
    }
}
