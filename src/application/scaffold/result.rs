//! Scaffold Result

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{ArtifactOutcome, ArtifactStatus};

/// Report of one scaffold pass
///
/// Holds exactly one outcome per catalog entry, in catalog order, so the
/// created and skipped lists always partition the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldResult {
    outcomes: Vec<ArtifactOutcome>,
    working_directory: PathBuf,
    dry_run: bool,
}

impl ScaffoldResult {
    pub(crate) fn new(
        outcomes: Vec<ArtifactOutcome>,
        working_directory: PathBuf,
        dry_run: bool,
    ) -> Self {
        Self {
            outcomes,
            working_directory,
            dry_run,
        }
    }

    /// Created paths, relative to the project root
    pub fn created(&self) -> Vec<&Path> {
        self.paths_with(ArtifactStatus::Created)
    }

    /// Skipped paths, relative to the project root
    pub fn skipped(&self) -> Vec<&Path> {
        self.paths_with(ArtifactStatus::Skipped)
    }

    pub fn outcomes(&self) -> &[ArtifactOutcome] {
        &self.outcomes
    }

    /// Resolved working directory
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn created_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_created()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.total() - self.created_count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when nothing was (or would be) written
    pub fn is_noop(&self) -> bool {
        self.created_count() == 0
    }

    fn paths_with(&self, status: ArtifactStatus) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter(|o| o.status == status)
            .map(|o| o.relative_path.as_path())
            .collect()
    }
}
