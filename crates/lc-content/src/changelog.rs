//! Content revisions, oldest first.
//!
//! A revision is logged on every export. It is not written into the
//! exported files, so the front-end's schema does not change with it.

use chrono::NaiveDate;
use schemars::JsonSchema;
use semver::Version;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ContentRevision {
    #[schemars(with = "String")]
    pub version: Version,
    pub date: NaiveDate,
    pub summary: &'static str,
}

/// Calendar date for a changelog entry. An impossible date in [`CHANGELOG`]
/// stops compilation.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("changelog date does not exist"),
    }
}

/// Every revision, oldest first.
pub const CHANGELOG: &[ContentRevision] = &[
    ContentRevision {
        version: Version::new(0, 1, 0),
        date: date(2025, 6, 2),
        summary: "Synthetic stages, demo blurb and three-node indicator graph.",
    },
    ContentRevision {
        version: Version::new(0, 2, 0),
        date: date(2025, 7, 14),
        summary: "Question bank and domain taxonomy added.",
    },
    ContentRevision {
        version: Version::new(0, 3, 0),
        date: date(2025, 8, 25),
        summary: "Blurbs regrouped per stage and domain with project records.",
    },
    ContentRevision {
        version: Version::new(1, 0, 0),
        date: date(2025, 10, 6),
        summary: "Single schema for projects: qrCode and author are always lists.",
    },
];

#[must_use]
pub const fn revisions() -> &'static [ContentRevision] {
    CHANGELOG
}

/// The revision the current literals correspond to.
#[must_use]
pub const fn current_revision() -> Option<&'static ContentRevision> {
    CHANGELOG.last()
}
