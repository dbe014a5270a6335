//! Scaffold Use Case
//!
//! Per catalog entry, in order:
//! 1. Resolve `project_root / relative_path`
//! 2. Ensure the parent directory chain
//! 3. Skip if anything exists at the target, otherwise write the content
//!
//! Then ensure the working directory. The first I/O failure aborts the pass;
//! files written before it stay on disk.

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::{
    ArtifactCatalog, ArtifactOutcome, ArtifactStatus, ProjectDescriptor,
};
use crate::domain::ports::{
    CreateOutcome, FileSystem, NoopEventSink, ScaffoldEvent, ScaffoldEventSink,
};
use crate::error::{ShepherdError, ShepherdResult};

use super::options::ScaffoldOptions;
use super::result::ScaffoldResult;

/// Scaffold use case, parameterized by the filesystem port
pub struct ScaffoldUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> ScaffoldUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(
        &self,
        descriptor: &ProjectDescriptor,
        catalog: &ArtifactCatalog,
        options: &ScaffoldOptions,
    ) -> ShepherdResult<ScaffoldResult> {
        self.execute_with_events(descriptor, catalog, options, &NoopEventSink)
    }

    pub fn execute_with_events(
        &self,
        descriptor: &ProjectDescriptor,
        catalog: &ArtifactCatalog,
        options: &ScaffoldOptions,
        events: &dyn ScaffoldEventSink,
    ) -> ShepherdResult<ScaffoldResult> {
        let detailed = events.wants_detailed_events();
        let root = options.project_root.as_path();

        events.on_event(ScaffoldEvent::Started {
            project: descriptor.name().to_string(),
            root: root.to_path_buf(),
            artifact_count: catalog.len(),
            dry_run: options.dry_run,
        });
        if detailed && !descriptor.ignored_keys().is_empty() {
            events.on_event(ScaffoldEvent::KeysIgnored {
                keys: descriptor.ignored_keys().to_vec(),
            });
        }

        let mut outcomes = Vec::with_capacity(catalog.len());
        for (index, entry) in catalog.iter().enumerate() {
            let target = entry.path().resolve(root);

            if let Some(parent) = target.parent() {
                if self.ensure_dir(parent, options.dry_run)? && detailed {
                    events.on_event(ScaffoldEvent::DirectoryEnsured {
                        path: parent.to_path_buf(),
                    });
                }
            }

            let status = self.materialize(&target, entry.content(), options.dry_run)?;
            if detailed {
                let path = entry.path().as_path().to_path_buf();
                events.on_event(match status {
                    ArtifactStatus::Created => ScaffoldEvent::ArtifactCreated { index, path },
                    ArtifactStatus::Skipped => ScaffoldEvent::ArtifactSkipped { index, path },
                });
            }
            outcomes.push(ArtifactOutcome::new(entry, root, status));
        }

        let working_directory = resolve_working_directory(
            &options.working_dir_base,
            descriptor.working_directory_or_default(),
        );
        self.ensure_dir(&working_directory, options.dry_run)?;
        if detailed {
            events.on_event(ScaffoldEvent::WorkingDirectoryEnsured {
                path: working_directory.clone(),
            });
        }

        let result = ScaffoldResult::new(outcomes, working_directory, options.dry_run);
        events.on_event(ScaffoldEvent::Completed {
            created_count: result.created_count(),
            skipped_count: result.skipped_count(),
        });
        Ok(result)
    }

    /// Returns true if the directory had to be created
    fn ensure_dir(&self, dir: &Path, dry_run: bool) -> ShepherdResult<bool> {
        if dir.as_os_str().is_empty() || self.file_system.is_dir(dir) {
            return Ok(false);
        }
        if !dry_run {
            self.file_system
                .create_dir_all(dir)
                .map_err(|e| ShepherdError::filesystem(dir, e))?;
        }
        Ok(true)
    }

    fn materialize(
        &self,
        target: &Path,
        content: &str,
        dry_run: bool,
    ) -> ShepherdResult<ArtifactStatus> {
        if self.file_system.exists(target) {
            return Ok(ArtifactStatus::Skipped);
        }
        if dry_run {
            return Ok(ArtifactStatus::Created);
        }
        match self
            .file_system
            .create_new(target, content)
            .map_err(|e| ShepherdError::filesystem(target, e))?
        {
            CreateOutcome::Written => Ok(ArtifactStatus::Created),
            // Lost a race with another writer; its copy is authoritative.
            CreateOutcome::AlreadyExists => Ok(ArtifactStatus::Skipped),
        }
    }
}

/// Join a working directory onto its base, dropping `.` components
pub fn resolve_working_directory(base: &Path, working_directory: &str) -> PathBuf {
    let resolved: PathBuf = base
        .join(working_directory)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if resolved.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        resolved
    }
}
