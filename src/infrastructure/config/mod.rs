use crate::domain::audio::LanguageCode;
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub project_root: PathBuf,
    /// Assets directory, relative to the project root
    pub assets_dir: String,
    pub input_file: String,
    pub output_file: String,
    pub audio_subdir: String,
    pub tts_provider: TtsProvider,
    pub language: LanguageCode,
    pub aws_region: String,
    // OpenAI
    pub openai_api_key: Option<String>,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Google,
    Polly,
    OpenAi,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            project_root: PathBuf::from(var_or("PROJECT_ROOT", ".")),
            assets_dir: var_or("ASSETS_DIR", "assets"),
            input_file: var_or("INPUT_FILE", "kanji_data.json"),
            output_file: var_or("OUTPUT_FILE", "kanji_data_with_audio.json"),
            audio_subdir: var_or("AUDIO_SUBDIR", "audio"),
            tts_provider: match var_or("TTS_PROVIDER", "google").to_lowercase().as_str() {
                "google" | "gtts" => TtsProvider::Google,
                "polly" => TtsProvider::Polly,
                "openai" => TtsProvider::OpenAi,
                other => {
                    return Err(AppError::Config(format!(
                        "TTS_PROVIDER must be google, polly or openai, got '{}'",
                        other
                    )))
                }
            },
            language: var_or("TTS_LANGUAGE", "ja")
                .parse()
                .map_err(|e| AppError::Config(format!("TTS_LANGUAGE: {}", e)))?,
            aws_region: var_or("AWS_REGION", "ap-northeast-1"),
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_tts_model: var_or("OPENAI_TTS_MODEL", "tts-1"),
            openai_tts_voice: var_or("OPENAI_TTS_VOICE", ""),
            log_format: match var_or("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        if config.tts_provider == TtsProvider::OpenAi && config.openai_api_key.is_none() {
            return Err(AppError::Config(
                "OPENAI_API_KEY is required when TTS_PROVIDER=openai".to_string(),
            ));
        }

        Ok(config)
    }

    /// Configuration with every default, rooted at `project_root`
    pub fn with_project_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            assets_dir: "assets".to_string(),
            input_file: "kanji_data.json".to_string(),
            output_file: "kanji_data_with_audio.json".to_string(),
            audio_subdir: "audio".to_string(),
            tts_provider: TtsProvider::Google,
            language: LanguageCode::Japanese,
            aws_region: "ap-northeast-1".to_string(),
            openai_api_key: None,
            openai_tts_model: "tts-1".to_string(),
            openai_tts_voice: String::new(),
            log_format: LogFormat::Pretty,
        }
    }

    pub fn assets_path(&self) -> PathBuf {
        self.project_root.join(&self.assets_dir)
    }

    pub fn input_path(&self) -> PathBuf {
        self.assets_path().join(&self.input_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.assets_path().join(&self.output_file)
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.assets_path().join(&self.audio_subdir)
    }

    /// Directory recorded in the dataset in front of each audio file name.
    /// Always uses forward slashes so the dataset is portable.
    pub fn audio_url_prefix(&self) -> String {
        [self.assets_dir.as_str(), self.audio_subdir.as_str()]
            .iter()
            .map(|part| part.trim_matches(|c| c == '/' || c == '\\'))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
