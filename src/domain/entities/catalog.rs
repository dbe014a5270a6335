//! Artifact catalog

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use super::CatalogEntry;
use crate::domain::value_objects::PathError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog entry '{key}' has an invalid path: {source}")]
    InvalidPath {
        key: String,
        #[source]
        source: PathError,
    },

    #[error("duplicate catalog key '{0}'")]
    DuplicateKey(String),

    #[error("duplicate catalog path '{}'", .0.display())]
    DuplicatePath(PathBuf),
}

/// An immutable, ordered set of artifacts to materialize
///
/// Iteration order is the construction order. Keys and target paths are
/// unique, so every entry maps to exactly one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCatalog {
    entries: Vec<CatalogEntry>,
}

impl ArtifactCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut keys = HashSet::new();
        let mut paths = HashSet::new();
        for entry in &entries {
            if !keys.insert(entry.key()) {
                return Err(CatalogError::DuplicateKey(entry.key().to_string()));
            }
            if !paths.insert(entry.path().as_path()) {
                return Err(CatalogError::DuplicatePath(
                    entry.path().as_path().to_path_buf(),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Build from `(key, relative path, content)` records
    pub fn from_static(
        records: &[(&'static str, &'static str, &'static str)],
    ) -> Result<Self, CatalogError> {
        let entries = records
            .iter()
            .map(|(key, path, content)| CatalogEntry::new(*key, path, *content))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArtifactCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
