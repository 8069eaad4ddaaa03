use super::error::EnrichmentError;
use crate::domain::audio::{AssetDecision, AssetName, AudioAssetServiceApi};
use crate::domain::kanji::{katakana_to_hiragana, CharacterEntry, Reading, ReadingKind};
use crate::error::AppError;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Counters describing one enrichment pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentSummary {
    pub entries: usize,
    pub synthesized: usize,
    pub reused: usize,
    pub empty_skipped: usize,
    pub invalid_skipped: usize,
    /// Readings whose asset name was already produced earlier in the same pass
    pub shared_names: usize,
}

impl EnrichmentSummary {
    pub fn assets_attached(&self) -> usize {
        self.synthesized + self.reused
    }
}

enum ReadingOutcome {
    Empty,
    Invalid,
    Attached {
        path: String,
        decision: AssetDecision,
        shared: bool,
    },
}

pub struct EnrichmentService {
    audio_service: Arc<dyn AudioAssetServiceApi>,
    asset_url_prefix: String,
}

impl EnrichmentService {
    /// `asset_url_prefix` is the directory recorded in the dataset in front of
    /// every file name, e.g. `assets/audio`
    pub fn new(audio_service: Arc<dyn AudioAssetServiceApi>, asset_url_prefix: impl Into<String>) -> Self {
        let asset_url_prefix = asset_url_prefix.into().trim_end_matches('/').to_string();
        Self {
            audio_service,
            asset_url_prefix,
        }
    }

    /// Attach `audioKunyomi` and `audioOnyomi` to every entry, synthesizing
    /// whatever audio is not stored yet.
    ///
    /// Stops at the first synthesis or storage failure; entries already
    /// processed keep their paths in memory but nothing is written here.
    pub async fn enrich(
        &self,
        entries: &mut [CharacterEntry],
    ) -> Result<EnrichmentSummary, EnrichmentError> {
        let mut summary = EnrichmentSummary::default();
        let mut seen_names = HashSet::new();

        for entry in entries.iter_mut() {
            self.enrich_entry(entry, &mut seen_names, &mut summary).await?;
            summary.entries += 1;
        }

        Ok(summary)
    }

    async fn enrich_entry(
        &self,
        entry: &mut CharacterEntry,
        seen_names: &mut HashSet<AssetName>,
        summary: &mut EnrichmentSummary,
    ) -> Result<(), EnrichmentError> {
        let character = entry.character().to_string();

        for kind in ReadingKind::ALL {
            let mut paths = Vec::new();

            for reading in entry.readings(kind) {
                match self.process_reading(&character, &reading, seen_names).await? {
                    ReadingOutcome::Empty => summary.empty_skipped += 1,
                    ReadingOutcome::Invalid => summary.invalid_skipped += 1,
                    ReadingOutcome::Attached {
                        path,
                        decision,
                        shared,
                    } => {
                        match decision {
                            AssetDecision::Synthesize => summary.synthesized += 1,
                            AssetDecision::Reuse => summary.reused += 1,
                        }
                        if shared {
                            summary.shared_names += 1;
                        }
                        paths.push(path);
                    }
                }
            }

            tracing::debug!(
                character = %character,
                kind = %kind,
                paths = paths.len(),
                "Readings processed"
            );
            entry.set_audio_paths(kind, paths);
        }

        Ok(())
    }

    async fn process_reading(
        &self,
        character: &str,
        reading: &Reading,
        seen_names: &mut HashSet<AssetName>,
    ) -> Result<ReadingOutcome, EnrichmentError> {
        let trimmed = reading.text.trim();
        if trimmed.is_empty() {
            return Ok(ReadingOutcome::Empty);
        }

        // On-readings are spoken (and named) in hiragana
        let text = match reading.kind {
            ReadingKind::Kun => trimmed.to_string(),
            ReadingKind::On => katakana_to_hiragana(trimmed),
        };

        let name = match AssetName::new(character, reading.kind, &text) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(
                    character = character,
                    kind = %reading.kind,
                    reading = %reading.text,
                    error = %AppError::from(e),
                    "Skipping reading that cannot be named"
                );
                return Ok(ReadingOutcome::Invalid);
            }
        };

        let shared = !seen_names.insert(name.clone());
        if shared {
            tracing::debug!(
                character = character,
                asset = %name,
                "Asset name already used in this run, sharing audio"
            );
        }

        let decision = self
            .audio_service
            .ensure_asset(&name, &text)
            .await
            .map_err(|e| EnrichmentError::for_character(character, e))?;

        Ok(ReadingOutcome::Attached {
            path: format!("{}/{}", self.asset_url_prefix, name.file_name()),
            decision,
            shared,
        })
    }
}
