use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::A11yError;

/// Reading-support strategy selected by the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Default,
    Dyslexia,
    Adhd,
    Adaptive,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::Default, Mode::Dyslexia, Mode::Adhd, Mode::Adaptive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Dyslexia => "dyslexia",
            Mode::Adhd => "adhd",
            Mode::Adaptive => "adaptive",
        }
    }

    /// The sensitivity controls are only offered in adaptive mode.
    pub fn shows_adaptive_controls(&self) -> bool {
        matches!(self, Mode::Adaptive)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mode::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| A11yError::UnknownMode(s.to_string()))
    }
}

/// Utility classes for an active tab or tooltip and its hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeStyle {
    pub active: &'static str,
    pub hover: &'static str,
}

const DEFAULT_STYLE: ModeStyle = ModeStyle {
    active: "bg-primary text-primary-foreground",
    hover: "hover:bg-muted hover:text-foreground",
};

const DYSLEXIA_STYLE: ModeStyle = ModeStyle {
    active: "bg-amber-100 text-amber-900 text-lg",
    hover: "hover:bg-amber-50 hover:text-amber-800",
};

const ADHD_STYLE: ModeStyle = ModeStyle {
    active: "bg-sky-100 text-sky-900 font-semibold",
    hover: "hover:bg-sky-50 hover:text-sky-800",
};

const ADAPTIVE_STYLE: ModeStyle = ModeStyle {
    active: "bg-violet-100 text-violet-900",
    hover: "hover:bg-violet-50 hover:text-violet-800",
};

/// Tab navigation and tooltip theming for `mode`.
pub fn mode_style(mode: Mode) -> ModeStyle {
    match mode {
        Mode::Default => DEFAULT_STYLE,
        Mode::Dyslexia => DYSLEXIA_STYLE,
        Mode::Adhd => ADHD_STYLE,
        Mode::Adaptive => ADAPTIVE_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("ADHD".parse::<Mode>().unwrap(), Mode::Adhd);
        assert_eq!(" adaptive ".parse::<Mode>().unwrap(), Mode::Adaptive);
        assert!(matches!(
            "focus".parse::<Mode>(),
            Err(A11yError::UnknownMode(name)) if name == "focus"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in Mode::all() {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), *mode);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Mode::Dyslexia).unwrap(), "\"dyslexia\"");
        let m: Mode = serde_json::from_str("\"adhd\"").unwrap();
        assert_eq!(m, Mode::Adhd);
    }

    #[test]
    fn every_mode_has_a_distinct_style() {
        let styles: Vec<ModeStyle> = Mode::all().iter().map(|m| mode_style(*m)).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(mode_style(Mode::Dyslexia).active, "bg-amber-100 text-amber-900 text-lg");
    }

    #[test]
    fn only_adaptive_shows_controls() {
        let shown: Vec<Mode> = Mode::all()
            .iter()
            .copied()
            .filter(Mode::shows_adaptive_controls)
            .collect();
        assert_eq!(shown, vec![Mode::Adaptive]);
    }
}
