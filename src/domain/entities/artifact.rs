//! Catalog entries and per-artifact outcomes

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::CatalogError;
use crate::domain::value_objects::SafePath;

/// One (key, relative path, content) record of an [`ArtifactCatalog`]
///
/// [`ArtifactCatalog`]: super::ArtifactCatalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    key: Cow<'static, str>,
    path: SafePath,
    content: Cow<'static, str>,
}

impl CatalogEntry {
    pub fn new(
        key: impl Into<Cow<'static, str>>,
        path: &str,
        content: impl Into<Cow<'static, str>>,
    ) -> Result<Self, CatalogError> {
        let key = key.into();
        let path = SafePath::new(path).map_err(|source| CatalogError::InvalidPath {
            key: key.to_string(),
            source,
        })?;
        Ok(Self {
            key,
            path,
            content: content.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &SafePath {
        &self.path
    }

    /// Opaque content, written verbatim
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Terminal state of one artifact after a scaffold pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    /// The target was absent and the content was written
    Created,
    /// The target already existed and was left untouched
    Skipped,
}

/// Result for a single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactOutcome {
    pub key: String,
    pub status: ArtifactStatus,
    /// Path relative to the project root
    pub relative_path: PathBuf,
    /// Path resolved against the project root
    pub path: PathBuf,
}

impl ArtifactOutcome {
    pub(crate) fn new(entry: &CatalogEntry, root: &Path, status: ArtifactStatus) -> Self {
        Self {
            key: entry.key().to_string(),
            status,
            relative_path: entry.path().as_path().to_path_buf(),
            path: entry.path().resolve(root),
        }
    }

    pub fn is_created(&self) -> bool {
        self.status == ArtifactStatus::Created
    }
}
