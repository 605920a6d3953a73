//! Integrity check behavior.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Treat integrity warnings (e.g. a dangling domain `questionId`) as errors.
    #[serde(default)]
    pub strict: bool,
}
