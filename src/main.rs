use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use kanji_audio::error::AppResult;
use kanji_audio::infrastructure::config::{Config, LogFormat, TtsProvider};
use kanji_audio::infrastructure::pipeline::run_enrichment;
use kanji_audio::infrastructure::repositories::{
    GoogleTtsRepository, OpenAiTtsRepository, PollyTtsRepository, TtsRepository,
};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    // Initialize logging
    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Enrichment aborted, no dataset written");
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(config: Config) -> AppResult<()> {
    tracing::info!(
        input = %config.input_path().display(),
        output = %config.output_path().display(),
        provider = ?config.tts_provider,
        "Starting kanji audio enrichment"
    );

    let tts_repo = create_tts_repository(&config).await;
    let summary = run_enrichment(&config, tts_repo).await?;

    tracing::info!(
        entries = summary.entries,
        assets_attached = summary.assets_attached(),
        synthesized = summary.synthesized,
        reused = summary.reused,
        empty_skipped = summary.empty_skipped,
        invalid_skipped = summary.invalid_skipped,
        shared_names = summary.shared_names,
        audio_dir = %config.audio_dir().display(),
        output = %config.output_path().display(),
        "Enrichment completed"
    );

    Ok(())
}

async fn create_tts_repository(config: &Config) -> Arc<dyn TtsRepository> {
    match config.tts_provider {
        TtsProvider::Google => {
            tracing::info!("Using Google Translate TTS");
            Arc::new(GoogleTtsRepository::new())
        }
        TtsProvider::Polly => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);

            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
            if !has_access_key || !has_secret_key {
                tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (profile, instance metadata, etc.)");
            }

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));

            Arc::new(PollyTtsRepository::new(polly_client))
        }
        TtsProvider::OpenAi => {
            tracing::info!(model = %config.openai_tts_model, "Using OpenAI TTS");

            let mut openai_config = async_openai::config::OpenAIConfig::new();
            if let Some(api_key) = &config.openai_api_key {
                openai_config = openai_config.with_api_key(api_key);
            }
            let client = Arc::new(async_openai::Client::with_config(openai_config));

            Arc::new(OpenAiTtsRepository::new(
                client,
                config.openai_tts_model.clone(),
                config.openai_tts_voice.clone(),
            ))
        }
    }
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "kanji_audio=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "kanji_audio=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
