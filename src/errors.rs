use thiserror::Error;

/// Errors raised at the parsing and configuration boundary.
///
/// Engine mutations themselves never fail: numeric input is clamped and
/// unrecognized keys are ignored.
#[derive(Debug, Error)]
pub enum A11yError {
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("unknown font family: {0}")]
    UnknownFontFamily(String),

    #[error("invalid assignment `{0}`, expected key=value")]
    InvalidAssignment(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, A11yError>;
