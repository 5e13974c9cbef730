//! Error handling for the resume ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode text: {0}")]
    Decoding(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

impl From<toml::de::Error> for ResumeRankerError {
    fn from(err: toml::de::Error) -> Self {
        ResumeRankerError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for ResumeRankerError {
    fn from(err: toml::ser::Error) -> Self {
        ResumeRankerError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
