use super::tts_repository::{split_into_batches, TtsRepository};
use crate::domain::audio::LanguageCode;
use async_trait::async_trait;

const GOOGLE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// Google Translate TTS accepts at most 100 characters per request
const MAX_BATCH_SIZE: usize = 100;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) kanji-audio";

/// Google Translate text-to-speech, the endpoint behind gTTS
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new() -> Self {
        Self::with_base_url(GOOGLE_TTS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn request_url(&self, text: &str, language: LanguageCode, index: usize, total: usize) -> String {
        format!(
            "{}?ie=UTF-8&q={}&tl={}&total={}&idx={}&textlen={}&client=tw-ob",
            self.base_url,
            urlencoding::encode(text),
            language.as_str(),
            total,
            index,
            text.chars().count()
        )
    }

    async fn call_google(
        &self,
        text: &str,
        language: LanguageCode,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        tracing::debug!(
            language = %language,
            text = text,
            batch_index = index,
            "Calling Google Translate TTS"
        );

        let response = self
            .http_client
            .get(self.request_url(text, language, index, total))
            .header("User-Agent", USER_AGENT)
            .header("Referer", "https://translate.google.com/")
            .send()
            .await
            .map_err(|e| format!("Google TTS request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!(
                "Google TTS returned {}: {}",
                status,
                error_text.chars().take(200).collect::<String>()
            ));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Google TTS audio: {}", e))?;

        Ok(audio.to_vec())
    }
}

impl Default for GoogleTtsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut merged_audio = Vec::new();

        // MP3 frames concatenate cleanly, so batches are simply appended
        for (index, batch) in batches.iter().enumerate() {
            let audio = self.call_google(batch, language, index, batches.len()).await?;
            merged_audio.extend(audio);
        }

        Ok(merged_audio)
    }

    fn provider_name(&self) -> &'static str {
        "google"
    }
}
