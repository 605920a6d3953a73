//! # lc-schema
//!
//! Published JSON Schemas for the Lifecourse content files.
//!
//! The record types live in `lc-core` with `#[derive(JsonSchema)]`; this
//! crate names their schemas so `lifecourse schema` can print them for
//! front-end tooling. The exporter does not consult it.

pub mod registry;

pub use registry::SchemaRegistry;
