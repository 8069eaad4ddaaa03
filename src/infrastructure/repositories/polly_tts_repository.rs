use super::tts_repository::{split_into_batches, TtsRepository};
use crate::domain::audio::LanguageCode;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Neural voice used for each language
    fn get_voice_for_language(language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::Japanese => "Kazuha",
            LanguageCode::English => "Joanna",
            LanguageCode::Chinese => "Zhiyu",
            LanguageCode::Korean => "Seoyeon",
        }
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let voice_name = Self::get_voice_for_language(language);
        let voice_id = VoiceId::from(voice_name);
        let engine = Engine::Neural;

        tracing::debug!(
            language = %language,
            voice = voice_name,
            text = text,
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    language = %language,
                    voice = voice_name,
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result
            .audio_stream
            .collect()
            .await
            .map_err(|e| format!("Failed to read audio stream: {}", e))?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for batch in split_into_batches(text, MAX_BATCH_SIZE) {
            let audio_data = self.call_polly(&batch, language).await?;
            merged_audio.extend(audio_data);
        }

        Ok(merged_audio)
    }

    fn provider_name(&self) -> &'static str {
        "polly"
    }
}
