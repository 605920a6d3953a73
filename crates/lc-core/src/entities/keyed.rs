use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::catalog::Collection;
use crate::errors::CoreError;

/// An insertion-ordered map from record id to record.
///
/// Serializes as a JSON object whose keys appear in insertion order. Every
/// way in ([`Keyed::insert`], [`Keyed::try_from_entries`], deserialization)
/// rejects a repeated id instead of replacing the earlier record.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct Keyed<T> {
    entries: IndexMap<String, T>,
}

impl<T> Keyed<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a record under `id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` naming `collection` if `id` is already
    /// present.
    pub fn insert(
        &mut self,
        collection: Collection,
        id: impl Into<String>,
        value: T,
    ) -> Result<(), CoreError> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(CoreError::Duplicate { collection, id });
        }
        self.entries.insert(id, value);
        Ok(())
    }

    /// Build from `(id, record)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` on the first repeated id.
    pub fn try_from_entries<I, K>(collection: Collection, entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mut keyed = Self::new();
        for (id, value) in entries {
            keyed.insert(collection, id, value)?;
        }
        Ok(keyed)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct KeyedVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedVisitor<T> {
    type Value = Keyed<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with unique ids")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((id, value)) = map.next_entry::<String, T>()? {
            if entries.contains_key(&id) {
                return Err(de::Error::custom(format_args!("duplicate id: {id}")));
            }
            entries.insert(id, value);
        }
        Ok(Keyed { entries })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(KeyedVisitor(PhantomData))
    }
}
