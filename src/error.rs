//! Error handling for the skillscan application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, SkillScanError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillScanError {
    fn from(err: anyhow::Error) -> Self {
        SkillScanError::Processing(err.to_string())
    }
}
