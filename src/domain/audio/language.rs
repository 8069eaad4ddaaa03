use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO 639-1 language codes the synthesis providers are asked to speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LanguageCode {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ko")]
    Korean,
}

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Japanese => "ja",
            LanguageCode::English => "en",
            LanguageCode::Chinese => "zh",
            LanguageCode::Korean => "ko",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" => Ok(LanguageCode::Japanese),
            "en" => Ok(LanguageCode::English),
            "zh" => Ok(LanguageCode::Chinese),
            "ko" => Ok(LanguageCode::Korean),
            other => Err(format!("unsupported language code '{}'", other)),
        }
    }
}
