use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RemixError;

/// One row of the ingredient table: a name, its embedding vector, and a short
/// description shown to the user as the rationale for a suggested substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    pub embedding: Vec<f32>,
    pub description: String,
}

/// Immutable table of ingredient embeddings, keyed by lower-cased name.
///
/// Loaded once at startup and never written to afterwards, so a single
/// instance can be shared read-only across request handlers.
#[derive(Debug, Default)]
pub struct IngredientStore {
    records: Vec<IngredientRecord>,
    index: HashMap<String, usize>,
}

impl IngredientStore {
    /// Load the store from a JSON file.
    ///
    /// Anything that makes the table unusable as-is (missing file, invalid
    /// JSON, inconsistent embedding dimensionality, duplicate names) surfaces
    /// as [`RemixError::StoreUnavailable`]. Whether that is fatal is the
    /// caller's policy, see [`crate::load_store`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RemixError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            RemixError::StoreUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let records: Vec<IngredientRecord> = serde_json::from_str(&raw).map_err(|e| {
            RemixError::StoreUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;
        let store = Self::from_records(records)?;
        debug!("loaded {} ingredients from {}", store.len(), path.display());
        Ok(store)
    }

    /// Build a store from in-memory records, enforcing the table invariants:
    /// every embedding has the same dimensionality and names are unique
    /// case-insensitively.
    pub fn from_records(records: Vec<IngredientRecord>) -> Result<Self, RemixError> {
        let mut index = HashMap::with_capacity(records.len());
        let dimension = records.first().map_or(0, |r| r.embedding.len());
        for (i, record) in records.iter().enumerate() {
            if record.embedding.len() != dimension {
                return Err(RemixError::StoreUnavailable(format!(
                    "embedding for '{}' has {} dimensions, expected {}",
                    record.name,
                    record.embedding.len(),
                    dimension
                )));
            }
            if index.insert(record.name.to_lowercase(), i).is_some() {
                return Err(RemixError::StoreUnavailable(format!(
                    "duplicate ingredient name '{}'",
                    record.name
                )));
            }
        }
        Ok(IngredientStore { records, index })
    }

    /// Empty store, used when the load policy degrades instead of failing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Case-insensitive exact-name lookup. A miss is an expected outcome, not
    /// an error; there is no fuzzy or partial matching.
    pub fn lookup(&self, name: &str) -> Option<&IngredientRecord> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.records[i])
    }

    /// Read-only iteration over every record.
    pub fn all(&self) -> &[IngredientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, embedding: Vec<f32>) -> IngredientRecord {
        IngredientRecord {
            name: name.to_string(),
            embedding,
            description: format!("about {name}"),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let store =
            IngredientStore::from_records(vec![record("Cream", vec![1.0, 0.0])]).unwrap();

        assert!(store.lookup("cream").is_some());
        assert!(store.lookup("CREAM").is_some());
        assert_eq!(store.lookup("cream").unwrap().name, "Cream");
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let store =
            IngredientStore::from_records(vec![record("Cream", vec![1.0, 0.0])]).unwrap();

        assert!(store.lookup("butter").is_none());
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let result = IngredientStore::from_records(vec![
            record("Cream", vec![1.0, 0.0]),
            record("Butter", vec![1.0, 0.0, 0.5]),
        ]);

        assert!(matches!(result, Err(RemixError::StoreUnavailable(_))));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = IngredientStore::from_records(vec![
            record("Cream", vec![1.0, 0.0]),
            record("cream", vec![0.0, 1.0]),
        ]);

        assert!(matches!(result, Err(RemixError::StoreUnavailable(_))));
    }

    #[test]
    fn test_empty_store() {
        let store = IngredientStore::empty();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.lookup("anything").is_none());
    }
}
