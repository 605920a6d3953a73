//! Where and how exported files are written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_dir() -> PathBuf {
    PathBuf::from("src/data")
}

fn default_extension() -> String {
    "json".to_string()
}

/// Shape of `questions.json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionLayout {
    /// `{ "q1": { "question": ..., "choices": [...], "answer": ... } }`
    #[default]
    Map,
    /// `[ { "id": "q1", "question": ..., ... } ]`
    List,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Content directory read by the front-end.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// File extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub question_layout: QuestionLayout,
}

impl OutputConfig {
    /// Path of the file for `stem` inside the output directory.
    #[must_use]
    pub fn file_path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{}", self.extension))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.extension.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.extension".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "output.extension".into(),
                reason: format!("'{}' must be a bare extension like 'json'", self.extension),
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extension: default_extension(),
            question_layout: QuestionLayout::default(),
        }
    }
}
