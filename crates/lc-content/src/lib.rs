//! # lc-content
//!
//! The one canonical set of content literals consumed by the front-end,
//! plus the changelog of content revisions.
//!
//! Edit the literals in the per-collection modules, add a [`ContentRevision`]
//! to [`changelog::CHANGELOG`], then re-run `lifecourse export`.

pub mod changelog;
mod blurbs;
mod domains;
mod graph;
mod questions;
mod stages;

pub use changelog::{ContentRevision, current_revision, revisions};

use lc_core::{Catalog, CoreError};

/// Shared accent color for stage cards.
pub(crate) const STAGE_COLOR: &str = "#2a2986";

/// Build the canonical catalog.
///
/// # Errors
///
/// Returns `CoreError::Duplicate` if an id is repeated within a collection.
pub fn canonical() -> Result<Catalog, CoreError> {
    Catalog::new(
        stages::life_stages(),
        blurbs::blurbs()?,
        graph::graph(),
        questions::questions()?,
        domains::domains(),
    )
}
