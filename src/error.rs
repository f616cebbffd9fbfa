use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaleoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Binary serialization failed: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown script mode '{0}' (expected 'hebrew' or 'paleo')")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, PaleoError>;
