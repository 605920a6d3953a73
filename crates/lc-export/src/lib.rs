//! # lc-export
//!
//! The content exporter: turns a [`lc_core::Catalog`] into the five JSON
//! files the front-end reads.
//!
//! - [`writer`] holds the file primitives (`ensure_output_directory`,
//!   `render`, `export`).
//! - [`ContentExporter`] runs the integrity check, then writes every
//!   collection, or compares what it would write against disk.

pub mod error;
mod exporter;
pub mod writer;

pub use error::ExportError;
pub use exporter::{CheckReport, ContentExporter, ExportSummary, FileCheck, FileReport, FileStatus};
