//! Domain Entities
//!
//! - `ProjectDescriptor` - The validated `project.yaml`
//! - `ArtifactCatalog` - Immutable ordered (path, content) records
//! - `ArtifactOutcome` - What happened to one catalog entry

mod artifact;
mod catalog;
mod descriptor;

pub use artifact::{ArtifactOutcome, ArtifactStatus, CatalogEntry};
pub use catalog::{ArtifactCatalog, CatalogError};
pub use descriptor::{ProjectDescriptor, DEFAULT_WORKING_DIRECTORY};
