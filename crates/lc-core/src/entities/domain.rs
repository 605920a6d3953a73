use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A topical category that cuts across life stages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Domain {
    pub id: String,
    pub label: String,
    pub color: String,
    pub icon: String,
    /// Question ids associated with this domain.
    #[serde(rename = "questionId", default)]
    pub question_ids: Vec<String>,
}
