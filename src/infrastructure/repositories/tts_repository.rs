use crate::domain::audio::LanguageCode;
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Translate, AWS Polly, OpenAI)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Merging audio chunks into a single audio stream
/// - Provider-specific voice selection
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns audio data ready to be stored (MP3 format)
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String>;

    /// Short provider name used in logs
    fn provider_name(&self) -> &'static str;
}

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Latin and Japanese sentence punctuation, with any trailing whitespace
    PATTERN.get_or_init(|| Regex::new(r"[.!?。！？、]+\s*").expect("sentence pattern is valid"))
}

/// Split text into batches of at most `max_chars` characters, preferring
/// sentence boundaries and falling back to hard character cuts.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current = String::new();
    let mut last_end = 0;

    let mut pieces: Vec<&str> = Vec::new();
    for mat in sentence_pattern().find_iter(text) {
        pieces.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }

    for piece in pieces {
        let piece_len = piece.chars().count();
        if !current.is_empty() && current.chars().count() + piece_len > max_chars {
            batches.push(current.trim().to_string());
            current = String::new();
        }

        if piece_len > max_chars {
            let chars: Vec<char> = piece.chars().collect();
            for chunk in chars.chunks(max_chars) {
                batches.push(chunk.iter().collect());
            }
        } else {
            current.push_str(piece);
        }
    }

    if !current.trim().is_empty() {
        batches.push(current.trim().to_string());
    }

    batches.retain(|b| !b.trim().is_empty());
    batches
}
