//! Error types for Shepherd
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::CatalogError;

/// Result type alias for Shepherd operations
pub type ShepherdResult<T> = Result<T, ShepherdError>;

/// Main error type for Shepherd operations
#[derive(Error, Debug)]
pub enum ShepherdError {
    /// The descriptor is not valid YAML
    #[error("invalid descriptor {file}: {message}")]
    DescriptorParse { file: PathBuf, message: String },

    /// The descriptor parsed but has the wrong shape
    #[error("{file}: {reason}")]
    DescriptorShape { file: PathBuf, reason: String },

    /// Directory creation, read, or write failure
    #[error("{}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact catalog is malformed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ShepherdError {
    /// Wrap an I/O error with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while validating the descriptor
    pub fn is_descriptor_error(&self) -> bool {
        matches!(
            self,
            Self::DescriptorParse { .. } | Self::DescriptorShape { .. }
        )
    }
}
