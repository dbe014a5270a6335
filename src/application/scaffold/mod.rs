//! Scaffold use case
//!
//! Writes every catalog entry that is absent, skips every entry that is
//! present, and ensures the descriptor's working directory.

mod options;
mod result;
mod use_case;


pub use options::ScaffoldOptions;
pub use result::ScaffoldResult;
pub use use_case::ScaffoldUseCase;

use std::path::Path;

use crate::domain::entities::{ArtifactCatalog, ProjectDescriptor};
use crate::error::{ShepherdError, ShepherdResult};
use crate::infrastructure::fs::LocalFs;

/// Scaffold `catalog` under `project_root` on the local disk
///
/// The working directory is resolved against the process current directory.
pub fn scaffold(
    descriptor: &ProjectDescriptor,
    catalog: &ArtifactCatalog,
    project_root: &Path,
) -> ShepherdResult<ScaffoldResult> {
    let cwd = std::env::current_dir().map_err(|e| ShepherdError::filesystem(".", e))?;
    let options = ScaffoldOptions::new(project_root).with_working_dir_base(cwd);
    ScaffoldUseCase::new(LocalFs::new()).execute(descriptor, catalog, &options)
}
