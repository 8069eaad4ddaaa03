use crate::domain::audio::AssetName;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage of synthesized audio assets, addressed by asset name.
///
/// Presence of an asset is the cache signal: nothing checks size, content or
/// whether the bytes are valid audio.
#[async_trait]
pub trait AudioAssetRepository: Send + Sync {
    /// Whether an asset with this name is already stored
    async fn exists(&self, name: &AssetName) -> Result<bool, String>;

    /// Store the audio for a name, creating the storage location if needed
    async fn save(&self, name: &AssetName, audio: &[u8]) -> Result<(), String>;
}

/// Audio assets as files in a single directory
pub struct FsAudioAssetRepository {
    audio_dir: PathBuf,
}

impl FsAudioAssetRepository {
    pub fn new(audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            audio_dir: audio_dir.into(),
        }
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    pub fn path_for(&self, name: &AssetName) -> PathBuf {
        self.audio_dir.join(name.file_name())
    }
}

#[async_trait]
impl AudioAssetRepository for FsAudioAssetRepository {
    async fn exists(&self, name: &AssetName) -> Result<bool, String> {
        let path = self.path_for(name);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(format!("Failed to inspect {}: {}", path.display(), e)),
        }
    }

    async fn save(&self, name: &AssetName, audio: &[u8]) -> Result<(), String> {
        tokio::fs::create_dir_all(&self.audio_dir).await.map_err(|e| {
            format!(
                "Failed to create audio directory {}: {}",
                self.audio_dir.display(),
                e
            )
        })?;

        let path = self.path_for(name);
        // Write beside the target first so an interrupted run never leaves a
        // truncated file under the final name
        let partial = self.audio_dir.join(format!("{}.part", name.file_name()));

        tokio::fs::write(&partial, audio)
            .await
            .map_err(|e| format!("Failed to write {}: {}", partial.display(), e))?;
        tokio::fs::rename(&partial, &path)
            .await
            .map_err(|e| format!("Failed to move audio into {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            audio_size_bytes = audio.len(),
            "Audio asset stored"
        );

        Ok(())
    }
}
