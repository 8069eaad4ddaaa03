pub mod audio_asset_repository;
pub mod dataset_repository;
pub mod google_tts_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod tts_repository;

pub use audio_asset_repository::{AudioAssetRepository, FsAudioAssetRepository};
pub use dataset_repository::DatasetRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use tts_repository::TtsRepository;
