use crate::domain::kanji::{CharacterEntry, Dataset};
use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads the source dataset and writes the augmented one
pub struct DatasetRepository {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl DatasetRepository {
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
        }
    }

    /// Load the whole dataset.
    ///
    /// # Errors
    /// `AppError::MissingInput` if the file does not exist,
    /// `AppError::Dataset` if it is not a JSON array of objects
    pub async fn load(&self) -> AppResult<Dataset> {
        let raw = match tokio::fs::read_to_string(&self.input_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::MissingInput(self.input_path.clone()))
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let document: Value = serde_json::from_str(&raw)?;
        let Value::Array(items) = document else {
            return Err(AppError::Dataset(format!(
                "{} must contain a JSON array of entries",
                self.input_path.display()
            )));
        };

        let dataset = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(CharacterEntry::from_fields(fields)),
                other => Err(AppError::Dataset(format!(
                    "entry {} is {}, expected an object",
                    index,
                    json_type(&other)
                ))),
            })
            .collect::<AppResult<Dataset>>()?;

        tracing::info!(
            path = %self.input_path.display(),
            entries = dataset.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Write the whole dataset as indented JSON with non-ASCII kept readable.
    ///
    /// The document goes to a temporary sibling first and is renamed into
    /// place, so the output file is either complete or absent.
    pub async fn save(&self, dataset: &[CharacterEntry]) -> AppResult<()> {
        let mut json = serde_json::to_string_pretty(dataset)?;
        json.push('\n');

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut temp_name = self
            .output_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        temp_name.push(".tmp");
        let temp_path = self.output_path.with_file_name(temp_name);

        tokio::fs::write(&temp_path, json.as_bytes()).await?;
        tokio::fs::rename(&temp_path, &self.output_path).await?;

        tracing::info!(
            path = %self.output_path.display(),
            entries = dataset.len(),
            "Augmented dataset written"
        );

        Ok(())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
