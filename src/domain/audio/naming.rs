use crate::domain::kanji::ReadingKind;

/// Characters Windows refuses in file names
pub const RESERVED_CHARACTERS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub const AUDIO_EXTENSION: &str = "mp3";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    #[error("reading '{text}' of '{character}' ({kind}) leaves nothing to name after sanitizing")]
    Empty {
        character: String,
        kind: ReadingKind,
        text: String,
    },
}

/// Deterministic, filesystem-safe name of an audio asset.
///
/// Built from `{character}_{kind}_{text}` with reserved characters removed and
/// surrounding whitespace trimmed. Nothing is escaped, so two readings that
/// sanitize to the same text share a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetName {
    stem: String,
}

impl AssetName {
    pub fn new(character: &str, kind: ReadingKind, text: &str) -> Result<Self, NamingError> {
        let empty = || NamingError::Empty {
            character: character.to_string(),
            kind,
            text: text.to_string(),
        };

        if sanitize(text).is_empty() {
            return Err(empty());
        }

        let stem = sanitize(&format!("{}_{}_{}", character, kind.as_str(), text));
        if stem.is_empty() {
            return Err(empty());
        }

        Ok(Self { stem })
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, AUDIO_EXTENSION)
    }
}

impl std::fmt::Display for AssetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

fn sanitize(raw: &str) -> String {
    raw.replace(RESERVED_CHARACTERS, "").trim().to_string()
}
