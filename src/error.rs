use color_match::MatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Palette parse error: {0}")]
    Palette(#[from] serde_json::Error),

    #[error("Unrecognized palette document: expected a JSON array or an object with a \"palette\" array, got {0}")]
    UnrecognizedPalette(&'static str),

    #[error("Output encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Match(#[from] MatchError),
}
