use std::fs;
use std::path::PathBuf;

use lc_config::{LcConfig, OutputConfig, QuestionLayout};
use lc_core::entities::QuestionEntry;
use lc_core::{Catalog, Collection};
use serde::Serialize;
use serde_json::Value;

use crate::error::ExportError;
use crate::writer;

/// One file written by [`ContentExporter::run`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileReport {
    pub collection: Collection,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub directory: PathBuf,
    pub revision: Option<String>,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    UpToDate,
    Stale,
    Missing,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileCheck {
    pub collection: Collection,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Result of comparing the rendered catalog against the files on disk.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub directory: PathBuf,
    pub files: Vec<FileCheck>,
}

impl CheckReport {
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.files.iter().all(|f| f.status == FileStatus::UpToDate)
    }

    pub fn outdated(&self) -> impl Iterator<Item = &FileCheck> {
        self.files.iter().filter(|f| f.status != FileStatus::UpToDate)
    }
}

/// A collection serialized and ready to write.
struct Payload {
    collection: Collection,
    path: PathBuf,
    value: Value,
}

/// Writes a [`Catalog`] to the configured output directory.
pub struct ContentExporter {
    output: OutputConfig,
    strict: bool,
    revision: Option<String>,
}

impl ContentExporter {
    #[must_use]
    pub fn new(config: &LcConfig) -> Self {
        Self {
            output: config.output.clone(),
            strict: config.validation.strict,
            revision: None,
        }
    }

    /// Content revision reported in the summary and logs.
    #[must_use]
    pub fn with_revision(mut self, revision: Option<String>) -> Self {
        self.revision = revision;
        self
    }

    /// Check integrity, then write all five collection files.
    ///
    /// Nothing is created or written when the integrity check fails or a
    /// collection cannot be encoded.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Integrity` for blocking findings, `Encode` if a
    /// collection cannot be serialized, or `CreateDir`/`Write` on I/O failure.
    pub fn run(&self, catalog: &Catalog) -> Result<ExportSummary, ExportError> {
        let report = catalog.integrity();
        for warning in report.warnings() {
            tracing::warn!(%warning, "integrity warning");
        }
        report.into_result(self.strict)?;

        let payloads = self.payloads(catalog)?;

        writer::ensure_output_directory(self.output.dir())?;

        let mut files = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let bytes = writer::export(
                payload.collection.file_stem(),
                &payload.value,
                &payload.path,
            )?;
            tracing::info!(
                collection = %payload.collection,
                path = %payload.path.display(),
                bytes,
                "wrote content file"
            );
            files.push(FileReport {
                collection: payload.collection,
                path: payload.path,
                bytes,
            });
        }

        tracing::info!(
            directory = %self.output.dir().display(),
            revision = self.revision.as_deref().unwrap_or("unknown"),
            files = files.len(),
            "export complete"
        );

        Ok(ExportSummary {
            directory: self.output.dir().to_path_buf(),
            revision: self.revision.clone(),
            files,
        })
    }

    /// Compare what [`Self::run`] would write with the files on disk.
    ///
    /// Writes nothing and does not run the integrity check.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Encode` if a collection cannot be serialized or
    /// `ExportError::Read` if an existing file cannot be read.
    pub fn check(&self, catalog: &Catalog) -> Result<CheckReport, ExportError> {
        let mut files = Vec::new();
        for payload in self.payloads(catalog)? {
            let expected = writer::render(payload.collection.file_stem(), &payload.value)?;
            let status = match fs::read(&payload.path) {
                Ok(actual) if actual == expected.as_bytes() => FileStatus::UpToDate,
                Ok(_) => FileStatus::Stale,
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => FileStatus::Missing,
                Err(source) => {
                    return Err(ExportError::Read {
                        path: payload.path,
                        source,
                    });
                }
            };
            tracing::debug!(collection = %payload.collection, ?status, "checked content file");
            files.push(FileCheck {
                collection: payload.collection,
                path: payload.path,
                status,
            });
        }

        Ok(CheckReport {
            directory: self.output.dir().to_path_buf(),
            files,
        })
    }

    fn payloads(&self, catalog: &Catalog) -> Result<Vec<Payload>, ExportError> {
        Collection::ALL
            .into_iter()
            .map(|collection| -> Result<Payload, ExportError> {
                let value = match collection {
                    Collection::LifeStages => to_value(collection, catalog.life_stages())?,
                    Collection::Blurbs => to_value(collection, catalog.blurbs())?,
                    Collection::Graph => to_value(collection, catalog.graph())?,
                    Collection::Questions => match self.output.question_layout {
                        QuestionLayout::Map => to_value(collection, catalog.questions())?,
                        QuestionLayout::List => {
                            to_value(collection, &QuestionEntry::from_bank(catalog.questions()))?
                        }
                    },
                    Collection::Domains => to_value(collection, catalog.domains())?,
                };

                Ok(Payload {
                    collection,
                    path: self.output.file_path(collection.file_stem()),
                    value,
                })
            })
            .collect()
    }
}

fn to_value<T: Serialize + ?Sized>(collection: Collection, data: &T) -> Result<Value, ExportError> {
    serde_json::to_value(data).map_err(|source| ExportError::Encode {
        name: collection.file_stem().to_string(),
        source,
    })
}
