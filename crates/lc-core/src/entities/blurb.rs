use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Keyed;

/// Image shown with a project, with its attribution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectImage {
    pub src: String,
    pub citation: String,
}

/// A short research summary attached to a (stage, domain) pair.
///
/// `qrCode` and `author` are always lists. Files written by older content
/// revisions used a bare string for a single value; reading accepts both.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub intro: String,
    pub conclusion: String,
    pub image: ProjectImage,
    #[serde(rename = "qrCode", deserialize_with = "crate::one_or_many::deserialize")]
    #[schemars(with = "Vec<String>")]
    pub qr_code: Vec<String>,
    #[serde(deserialize_with = "crate::one_or_many::deserialize")]
    #[schemars(with = "Vec<String>")]
    pub author: Vec<String>,
}

/// Projects and quiz questions for one domain within one stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DomainBundle {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub questions: Vec<String>,
}

/// All domain bundles for one stage, keyed by domain id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StageBlurbs {
    pub domains: Keyed<DomainBundle>,
}

/// Stage id to that stage's domain bundles.
pub type Blurbs = Keyed<StageBlurbs>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn legacy_project_json() -> &'static str {
        r#"{
            "title": "Reading together",
            "intro": "Intro",
            "conclusion": "Outro",
            "image": {"src": "/img/read.png", "citation": "Photo: Lim"},
            "qrCode": "/qr/read.png",
            "author": "Ana Lim"
        }"#
    }

    #[test]
    fn legacy_single_values_normalize_to_lists() {
        let project: Project = serde_json::from_str(legacy_project_json()).unwrap();
        assert_eq!(project.qr_code, vec!["/qr/read.png".to_string()]);
        assert_eq!(project.author, vec!["Ana Lim".to_string()]);

        let value = serde_json::to_value(&project).unwrap();
        assert!(value["qrCode"].is_array());
        assert!(value["author"].is_array());
    }

    #[test]
    fn bundle_defaults_are_empty() {
        let bundle: DomainBundle = serde_json::from_str("{}").unwrap();
        assert!(bundle.projects.is_empty());
        assert!(bundle.questions.is_empty());
    }
}
