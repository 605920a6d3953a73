use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named phase of life used to organize content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LifeStage {
    pub id: String,
    pub title: String,
    /// Emoji or asset path.
    pub icon: String,
    /// Domain ids shown for this stage, in display order.
    pub domains: Vec<String>,
    /// Keys into the blurbs mapping.
    #[serde(default)]
    pub blurbs: Vec<String>,
    pub color: String,
    #[serde(default)]
    pub metrics: Vec<String>,
}
