//! Safe Path Value Object
//!
//! A catalog target path that is guaranteed to land inside the project root:
//! - Relative, with no root or drive prefix
//! - No traversal components (`..`)
//! - Names a file (has a final normal component)
//! - `.` components are dropped so equal targets compare equal

use std::fmt;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Error when path validation fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path contains traversal components (..): {0}")]
    ContainsTraversal(PathBuf),

    #[error("absolute paths are not allowed: {0}")]
    AbsoluteNotAllowed(PathBuf),

    #[error("path does not name a file: {0}")]
    NoFileName(PathBuf),

    #[error("path is empty")]
    Empty,
}

/// A validated relative file path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Create a new SafePath after validation
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        for component in path.components() {
            match component {
                Component::ParentDir => {
                    return Err(PathError::ContainsTraversal(path.to_path_buf()))
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed(path.to_path_buf()))
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        if !matches!(path.components().next_back(), Some(Component::Normal(_))) {
            return Err(PathError::NoFileName(path.to_path_buf()));
        }

        let normalized = path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        Ok(Self(normalized))
    }

    /// Get the inner path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve against a root directory
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for SafePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for SafePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for SafePath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
