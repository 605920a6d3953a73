//! Deserializer for fields that older content files wrote either as a bare
//! string or as a list of strings (`author`, `qrCode`).
//!
//! Reading accepts both shapes; the typed field is always a `Vec<String>`, so
//! serialization always emits the list shape.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Deserialize a string or a list of strings into a list.
///
/// # Errors
///
/// Returns the deserializer's error when the value is neither shape.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
