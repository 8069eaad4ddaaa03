use super::error::AudioServiceError;
use super::language::LanguageCode;
use super::naming::AssetName;
use crate::infrastructure::repositories::{AudioAssetRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// What the cache gate decided for one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetDecision {
    /// No asset stored yet, the provider has to be called
    Synthesize,
    /// An asset is already stored under this name
    Reuse,
}

pub struct AudioAssetService {
    tts_repo: Arc<dyn TtsRepository>,
    asset_repo: Arc<dyn AudioAssetRepository>,
    language: LanguageCode,
}

impl AudioAssetService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        asset_repo: Arc<dyn AudioAssetRepository>,
        language: LanguageCode,
    ) -> Self {
        Self {
            tts_repo,
            asset_repo,
            language,
        }
    }
}

#[async_trait]
pub trait AudioAssetServiceApi: Send + Sync {
    /// Cache gate: synthesize only when nothing is stored under the name
    async fn decide(&self, name: &AssetName) -> Result<AssetDecision, AudioServiceError>;

    /// Make sure an asset exists for `name`, synthesizing `text` if needed.
    ///
    /// Returns the decision that was taken. A provider failure is returned as
    /// `AudioServiceError::Synthesis` and nothing is stored.
    async fn ensure_asset(
        &self,
        name: &AssetName,
        text: &str,
    ) -> Result<AssetDecision, AudioServiceError>;
}

#[async_trait]
impl AudioAssetServiceApi for AudioAssetService {
    async fn decide(&self, name: &AssetName) -> Result<AssetDecision, AudioServiceError> {
        let exists = self
            .asset_repo
            .exists(name)
            .await
            .map_err(AudioServiceError::Storage)?;

        Ok(if exists {
            AssetDecision::Reuse
        } else {
            AssetDecision::Synthesize
        })
    }

    async fn ensure_asset(
        &self,
        name: &AssetName,
        text: &str,
    ) -> Result<AssetDecision, AudioServiceError> {
        let decision = self.decide(name).await?;
        if decision == AssetDecision::Reuse {
            tracing::debug!(asset = %name, "Audio asset already present, skipping synthesis");
            return Ok(decision);
        }

        let audio = self.synthesize(name, text).await?;

        self.asset_repo
            .save(name, &audio)
            .await
            .map_err(AudioServiceError::Storage)?;

        Ok(decision)
    }
}

impl AudioAssetService {
    async fn synthesize(&self, name: &AssetName, text: &str) -> Result<Vec<u8>, AudioServiceError> {
        let start_time = std::time::Instant::now();

        let audio = self
            .tts_repo
            .synthesize(text, self.language)
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = self.tts_repo.provider_name(),
                    asset = %name,
                    text = text,
                    error = %e,
                    "Speech synthesis failed"
                );
                AudioServiceError::Synthesis(format!("{} ({}): {}", name, text, e))
            })?;

        // An empty file would be taken as a valid cached asset on every later run
        if audio.is_empty() {
            return Err(AudioServiceError::Synthesis(format!(
                "{} ({}): provider {} returned no audio",
                name,
                text,
                self.tts_repo.provider_name()
            )));
        }

        tracing::info!(
            provider = self.tts_repo.provider_name(),
            asset = %name,
            text = text,
            language = %self.language,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "Audio synthesized"
        );

        Ok(audio)
    }
}
