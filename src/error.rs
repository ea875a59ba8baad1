use thiserror::Error;

/// Errors produced by the palette and theme engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("unknown palette strategy `{0}`")]
    UnknownStrategy(String),

    #[error("unknown palette intensity `{0}`")]
    UnknownIntensity(String),

    #[error("unknown export target `{0}`")]
    UnknownExportTarget(String),

    #[error("unknown color format `{0}`")]
    UnknownColorFormat(String),

    #[error("contrast level {0} is outside 1.0..=21.0")]
    ContrastOutOfRange(f32),

    #[error("state payload is not valid base64url: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("state payload is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("query string carries no `{0}` state")]
    MissingState(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
