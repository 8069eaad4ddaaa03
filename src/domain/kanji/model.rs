use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CHARACTER_FIELD: &str = "kanji";
pub const KUN_READINGS_FIELD: &str = "kunyomi";
pub const ON_READINGS_FIELD: &str = "onyomi";
pub const KUN_AUDIO_FIELD: &str = "audioKunyomi";
pub const ON_AUDIO_FIELD: &str = "audioOnyomi";

/// Reading category of a kanji pronunciation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingKind {
    /// Native Japanese reading, usually written in hiragana
    Kun,
    /// Sino-Japanese reading, usually written in katakana
    On,
}

impl ReadingKind {
    /// Processing order, which also fixes the order of the output fields
    pub const ALL: [ReadingKind; 2] = [ReadingKind::Kun, ReadingKind::On];

    /// Token used inside asset names
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingKind::Kun => "kun",
            ReadingKind::On => "on",
        }
    }

    pub fn readings_field(&self) -> &'static str {
        match self {
            ReadingKind::Kun => KUN_READINGS_FIELD,
            ReadingKind::On => ON_READINGS_FIELD,
        }
    }

    pub fn audio_field(&self) -> &'static str {
        match self {
            ReadingKind::Kun => KUN_AUDIO_FIELD,
            ReadingKind::On => ON_AUDIO_FIELD,
        }
    }
}

impl std::fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One pronunciation of a kanji as it appears in the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub text: String,
    pub kind: ReadingKind,
}

/// A single record of the kanji dataset.
///
/// The record is kept as its raw JSON object so that fields the pipeline
/// does not know about survive the round trip in their original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterEntry {
    fields: Map<String, Value>,
}

impl CharacterEntry {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The kanji itself, or an empty string when the record has none
    pub fn character(&self) -> &str {
        self.fields
            .get(CHARACTER_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Readings of the given kind in dataset order.
    ///
    /// A missing or null list yields no readings. Numbers and booleans are
    /// stringified; nulls and nested values become empty readings.
    pub fn readings(&self, kind: ReadingKind) -> Vec<Reading> {
        let Some(Value::Array(items)) = self.fields.get(kind.readings_field()) else {
            return Vec::new();
        };

        items
            .iter()
            .map(|item| Reading {
                text: reading_text(item),
                kind,
            })
            .collect()
    }

    /// Audio paths previously attached for the given kind
    pub fn audio_paths(&self, kind: ReadingKind) -> Vec<String> {
        match self.fields.get(kind.audio_field()) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Attach audio paths, appending the field or replacing it in place
    pub fn set_audio_paths(&mut self, kind: ReadingKind, paths: Vec<String>) {
        let value = Value::Array(paths.into_iter().map(Value::String).collect());
        self.fields.insert(kind.audio_field().to_string(), value);
    }
}

fn reading_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// The full dataset, in file order
pub type Dataset = Vec<CharacterEntry>;
