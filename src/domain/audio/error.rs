use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AudioServiceError {
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("asset storage failed: {0}")]
    Storage(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AudioServiceError> for AppError {
    fn from(err: AudioServiceError) -> Self {
        match err {
            AudioServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            AudioServiceError::Storage(msg) => AppError::Io(std::io::Error::other(msg)),
            AudioServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
