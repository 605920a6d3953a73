//! Cross-cutting error types for Lifecourse.
//!
//! Crate-specific errors (`ConfigError`, `ExportError`) live in
//! their own crates. The binary converges everything through `anyhow`.

use thiserror::Error;

use crate::catalog::Collection;
use crate::integrity::Finding;

/// Errors that can be raised while building or checking content.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two records in the same collection share an identifier.
    #[error("Duplicate {collection} id: {id}")]
    Duplicate { collection: Collection, id: String },

    /// The assembled catalog has blocking integrity findings.
    #[error("Integrity check failed with {} blocking finding(s): {}", .findings.len(), summarize(.findings))]
    Integrity { findings: Vec<Finding> },
}

fn summarize(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
