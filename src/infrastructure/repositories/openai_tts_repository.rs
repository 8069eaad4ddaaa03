use super::tts_repository::{split_into_batches, TtsRepository};
use crate::domain::audio::LanguageCode;
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_BATCH_SIZE: usize = 4096;

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    default_voice: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, default_voice: String) -> Self {
        Self {
            client,
            model,
            default_voice,
        }
    }

    fn voice_for_language(&self, language: LanguageCode) -> String {
        if !self.default_voice.is_empty() {
            return self.default_voice.clone();
        }

        match language {
            LanguageCode::Japanese => "nova",
            LanguageCode::English => "alloy",
            LanguageCode::Chinese => "shimmer",
            LanguageCode::Korean => "echo",
        }
        .to_string()
    }

    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    fn parse_voice(voice: &str) -> Voice {
        match voice.to_lowercase().as_str() {
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Alloy,
        }
    }

    async fn call_openai(&self, text: &str, voice: &str) -> Result<Vec<u8>, String> {
        tracing::debug!(
            model = %self.model,
            voice = voice,
            text = text,
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: self.speech_model(),
            input: text.to_string(),
            voice: Self::parse_voice(voice),
            response_format: None, // Defaults to MP3
            speed: None,
        };

        let response = self
            .client
            .audio()
            .speech(request)
            .await
            .map_err(|e| format!("OpenAI TTS error: {}", e))?;

        Ok(response.bytes.to_vec())
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let voice = self.voice_for_language(language);
        let mut merged_audio = Vec::new();

        for batch in split_into_batches(text, MAX_BATCH_SIZE) {
            let audio_data = self.call_openai(&batch, &voice).await?;
            merged_audio.extend(audio_data);
        }

        Ok(merged_audio)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
