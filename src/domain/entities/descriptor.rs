//! Project descriptor entity

use serde::Serialize;

/// Working directory used when the descriptor does not name one
pub const DEFAULT_WORKING_DIRECTORY: &str = "./workspace";

/// A validated project descriptor
///
/// Only constructed with a non-empty `name`. The working directory default is
/// not stored here; readers apply it through
/// [`ProjectDescriptor::working_directory_or_default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    name: String,
    working_directory: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignored_keys: Vec<String>,
}

impl ProjectDescriptor {
    /// Create a descriptor with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            working_directory: None,
            ignored_keys: Vec::new(),
        }
    }

    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub(crate) fn with_ignored_keys(mut self, keys: Vec<String>) -> Self {
        self.ignored_keys = keys;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The working directory exactly as written in the descriptor
    pub fn working_directory(&self) -> Option<&str> {
        self.working_directory.as_deref()
    }

    pub fn working_directory_or_default(&self) -> &str {
        self.working_directory
            .as_deref()
            .unwrap_or(DEFAULT_WORKING_DIRECTORY)
    }

    /// Top-level keys present in the document but not used by scaffolding
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }
}
