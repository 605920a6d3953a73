//! Named schemas for every exported file, record and report.

use std::collections::BTreeMap;

use lc_core::entities::{
    Blurbs, Domain, DomainBundle, Graph, GraphEdge, GraphNode, LifeStage, Project, Question,
    QuestionBank, QuestionEntry,
};
use lc_core::{Collection, IntegrityReport};
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

/// Schema name for the list layout of `questions.json`.
pub const QUESTIONS_LIST: &str = "questions_list";

/// Schemas keyed by name, iterated in name order.
///
/// File layouts use [`Collection::as_str`]; records and reports use their
/// snake-case type name.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, Value>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            schemas: BTreeMap::new(),
        };

        registry.add::<Vec<LifeStage>>(Collection::LifeStages.as_str());
        registry.add::<Blurbs>(Collection::Blurbs.as_str());
        registry.add::<Graph>(Collection::Graph.as_str());
        registry.add::<QuestionBank>(Collection::Questions.as_str());
        registry.add::<Vec<QuestionEntry>>(QUESTIONS_LIST);
        registry.add::<Vec<Domain>>(Collection::Domains.as_str());

        registry.add::<LifeStage>("life_stage");
        registry.add::<Domain>("domain");
        registry.add::<Project>("project");
        registry.add::<DomainBundle>("domain_bundle");
        registry.add::<Question>("question");
        registry.add::<GraphNode>("graph_node");
        registry.add::<GraphEdge>("graph_edge");

        registry.add::<IntegrityReport>("integrity_report");
        registry.add::<lc_content::ContentRevision>("content_revision");

        registry
    }

    fn add<T: JsonSchema>(&mut self, name: &'static str) {
        self.schemas.insert(name, schema_for!(T).to_value());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
