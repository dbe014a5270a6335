//! Scaffold Options

use std::path::PathBuf;

/// Options for the scaffold use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Root that catalog paths are resolved against
    pub project_root: PathBuf,
    /// Base for a relative working directory (the process cwd in the CLI)
    pub working_dir_base: PathBuf,
    /// Report what would happen without touching the filesystem
    pub dry_run: bool,
}

impl ScaffoldOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            working_dir_base: PathBuf::from("."),
            dry_run: false,
        }
    }

    pub fn with_working_dir_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.working_dir_base = base.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
