//! Record structs for every collection the exporter writes.
//!
//! Field order in each struct is the key order of the emitted JSON objects.
//! All records derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod blurb;
mod domain;
mod graph;
mod keyed;
mod life_stage;
mod question;

pub use blurb::{Blurbs, DomainBundle, Project, ProjectImage, StageBlurbs};
pub use domain::Domain;
pub use graph::{EdgeKind, Graph, GraphEdge, GraphNode};
pub use keyed::Keyed;
pub use life_stage::LifeStage;
pub use question::{Question, QuestionBank, QuestionEntry};
