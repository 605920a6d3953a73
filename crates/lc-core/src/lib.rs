//! # lc-core
//!
//! Core content types and error types for Lifecourse.
//!
//! This crate provides the foundational types shared across all Lifecourse crates:
//! - Record structs for every exported collection (life stages, domains, blurbs, questions, graph)
//! - Insertion-ordered keyed collections that reject duplicate ids at construction
//! - The `Catalog` aggregate and the `Collection` names with their file stems
//! - Referential-integrity checks over a whole catalog
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod integrity;
pub mod one_or_many;

pub use catalog::{Catalog, Collection};
pub use errors::CoreError;
pub use integrity::{Finding, IntegrityReport, Severity};
