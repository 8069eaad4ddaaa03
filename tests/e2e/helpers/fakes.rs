use async_trait::async_trait;
use kanji_audio::domain::audio::LanguageCode;
use kanji_audio::infrastructure::repositories::TtsRepository;
use parking_lot::Mutex;

/// Fake provider that records every call and returns a tiny MP3 frame.
/// Fails for any text listed in `fail_on`.
pub struct CountingTtsRepository {
    calls: Mutex<Vec<(String, LanguageCode)>>,
    fail_on: Mutex<Vec<String>>,
}

impl CountingTtsRepository {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_on(&self, text: &str) {
        self.fail_on.lock().push(text.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(t, _)| t.clone()).collect()
    }

    pub fn languages(&self) -> Vec<LanguageCode> {
        self.calls.lock().iter().map(|(_, l)| *l).collect()
    }

    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

#[async_trait]
impl TtsRepository for CountingTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        self.calls.lock().push((text.to_string(), language));

        if self.fail_on.lock().iter().any(|t| t == text) {
            return Err(format!("fake provider refused '{}'", text));
        }

        Ok(mock_audio_bytes(text))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// MP3 frame header followed by the text, so each asset is distinguishable
pub fn mock_audio_bytes(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFB, 0x90, 0x00];
    bytes.extend_from_slice(text.as_bytes());
    bytes
}
