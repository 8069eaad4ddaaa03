use crate::domain::audio::NamingError;
use std::path::PathBuf;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input dataset not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Invalid reading: {0}")]
    InvalidReading(String),

    #[error("Malformed dataset: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Process exit status for this error (sysexits.h values)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput(_) => 66,
            Self::Dataset(_) | Self::InvalidReading(_) => 65,
            Self::Synthesis(_) => 69,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
            Self::Internal(_) => 70,
        }
    }
}

impl From<NamingError> for AppError {
    fn from(err: NamingError) -> Self {
        AppError::InvalidReading(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Dataset(err.to_string())
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
