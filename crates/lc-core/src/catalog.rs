//! The `Catalog` aggregate: every collection the exporter writes, built once.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Blurbs, Domain, Graph, LifeStage, QuestionBank};
use crate::errors::CoreError;

/// The five exported collections, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    LifeStages,
    Blurbs,
    Graph,
    Questions,
    Domains,
}

impl Collection {
    /// Write order.
    pub const ALL: [Self; 5] = [
        Self::LifeStages,
        Self::Blurbs,
        Self::Graph,
        Self::Questions,
        Self::Domains,
    ];

    /// File name without extension, as read by the front-end.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::LifeStages => "lifeStages",
            Self::Blurbs => "blurbs",
            Self::Graph => "graph",
            Self::Questions => "questions",
            Self::Domains => "domains",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LifeStages => "life_stages",
            Self::Blurbs => "blurbs",
            Self::Graph => "graph",
            Self::Questions => "questions",
            Self::Domains => "domains",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All content collections.
///
/// Sequence collections are checked for duplicate ids in [`Catalog::new`];
/// keyed collections already reject duplicates on insert.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) life_stages: Vec<LifeStage>,
    pub(crate) blurbs: Blurbs,
    pub(crate) graph: Graph,
    pub(crate) questions: QuestionBank,
    pub(crate) domains: Vec<Domain>,
}

impl Catalog {
    /// Assemble a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` if two life stages, two domains, or two
    /// graph nodes share an id.
    pub fn new(
        life_stages: Vec<LifeStage>,
        blurbs: Blurbs,
        graph: Graph,
        questions: QuestionBank,
        domains: Vec<Domain>,
    ) -> Result<Self, CoreError> {
        ensure_unique(Collection::LifeStages, life_stages.iter().map(|s| s.id.as_str()))?;
        ensure_unique(Collection::Domains, domains.iter().map(|d| d.id.as_str()))?;
        ensure_unique(Collection::Graph, graph.nodes.iter().map(|n| n.id.as_str()))?;

        Ok(Self {
            life_stages,
            blurbs,
            graph,
            questions,
            domains,
        })
    }

    #[must_use]
    pub fn life_stages(&self) -> &[LifeStage] {
        &self.life_stages
    }

    #[must_use]
    pub const fn blurbs(&self) -> &Blurbs {
        &self.blurbs
    }

    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub const fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    #[must_use]
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }
}

fn ensure_unique<'a>(
    collection: Collection,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CoreError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Duplicate {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
