pub mod error;
pub mod language;
pub mod naming;
pub mod service;

pub use error::AudioServiceError;
pub use language::LanguageCode;
pub use naming::{AssetName, NamingError};
pub use service::{AssetDecision, AudioAssetService, AudioAssetServiceApi};
