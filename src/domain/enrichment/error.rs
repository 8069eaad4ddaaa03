use crate::domain::audio::AudioServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("synthesis failed for '{character}': {message}")]
    Synthesis { character: String, message: String },
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnrichmentError {
    pub(crate) fn for_character(character: &str, err: AudioServiceError) -> Self {
        match err {
            AudioServiceError::Synthesis(message) => EnrichmentError::Synthesis {
                character: character.to_string(),
                message,
            },
            AudioServiceError::Storage(msg) => EnrichmentError::Dependency(msg),
            AudioServiceError::Other(e) => EnrichmentError::Other(e),
        }
    }
}

impl From<EnrichmentError> for AppError {
    fn from(err: EnrichmentError) -> Self {
        match err {
            EnrichmentError::Synthesis { .. } => AppError::Synthesis(err.to_string()),
            EnrichmentError::Dependency(msg) => AppError::Io(std::io::Error::other(msg)),
            EnrichmentError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
