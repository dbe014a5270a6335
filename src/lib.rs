//! Shepherd - idempotent scaffolder for DeepAgents workspaces
//!
//! Reads a `project.yaml` descriptor and materializes a fixed catalog of
//! agent and skill files under `.deepagents/`, writing each file only if it
//! does not already exist, then ensures the project's working directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod templates;

// Re-exports for convenience
pub use application::{scaffold, ScaffoldOptions, ScaffoldResult, ScaffoldUseCase};
pub use domain::entities::{
    ArtifactCatalog, ArtifactOutcome, ArtifactStatus, CatalogEntry, CatalogError,
    ProjectDescriptor, DEFAULT_WORKING_DIRECTORY,
};
pub use error::{ShepherdError, ShepherdResult};
pub use infrastructure::load_descriptor;
