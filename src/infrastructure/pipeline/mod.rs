use std::sync::Arc;

use crate::domain::audio::AudioAssetService;
use crate::domain::enrichment::{EnrichmentService, EnrichmentSummary};
use crate::error::AppResult;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{
    DatasetRepository, FsAudioAssetRepository, TtsRepository,
};

/// Run one enrichment pass: load, enrich every entry, write once.
///
/// The provider is injected so callers choose (or fake) the synthesis
/// backend. Any fatal error returns before the output file is touched;
/// audio already stored stays on disk and is reused by the next run.
pub async fn run_enrichment(
    config: &Config,
    tts_repo: Arc<dyn TtsRepository>,
) -> AppResult<EnrichmentSummary> {
    let dataset_repo = DatasetRepository::new(config.input_path(), config.output_path());
    let asset_repo = Arc::new(FsAudioAssetRepository::new(config.audio_dir()));

    let audio_service = Arc::new(AudioAssetService::new(
        tts_repo,
        asset_repo,
        config.language,
    ));
    let enrichment_service = EnrichmentService::new(audio_service, config.audio_url_prefix());

    let mut dataset = dataset_repo.load().await?;

    tracing::info!(
        entries = dataset.len(),
        audio_dir = %config.audio_dir().display(),
        language = %config.language,
        "Enriching dataset"
    );

    let summary = enrichment_service.enrich(&mut dataset).await?;

    dataset_repo.save(&dataset).await?;

    Ok(summary)
}
