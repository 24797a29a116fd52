pub mod errors;
pub mod capabilities;
pub mod engine;
pub mod font;
pub mod mode;
pub mod preset;
pub mod profile;
pub mod style;
pub mod text;

pub use capabilities::{
    ChartDatum, ListenerRegistry, SensoryBreakListener, SpeechAdapter, Toast, ToastNotifier,
    ToastSeverity, UnavailableSpeech,
};
pub use engine::{ProfileEngine, Snapshot};
pub use errors::{A11yError, Result};
pub use font::{FontFamily, FontSettings, FontSettingsPatch};
pub use mode::{mode_style, Mode, ModeStyle};
pub use preset::SessionPreset;
pub use profile::{SensitivityFlag, SensitivityProfile};
pub use style::{derive_style_descriptor, StyleDescriptor};
pub use text::{difficult_patterns, render_text, simplify_words, Lexicon, PatternSpan, RenderedText};

/// Split a `key=value` argument. Whitespace around either side is trimmed.
pub fn parse_assignment(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.trim().to_string())),
        _ => Err(A11yError::InvalidAssignment(s.to_string())),
    }
}

/// Convenience: descriptor for a fresh session in `mode`.
pub fn default_descriptor(mode: Mode) -> StyleDescriptor {
    derive_style_descriptor(&SensitivityProfile::default(), &FontSettings::default(), mode)
}
