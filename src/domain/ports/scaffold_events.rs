//! Scaffold Event Port
//!
//! Observable interface for a scaffold pass. Drives verbose console output
//! and the `--json` NDJSON stream.

use std::path::PathBuf;

/// Event emitted during a scaffold pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// Pass started
    Started {
        project: String,
        root: PathBuf,
        artifact_count: usize,
        dry_run: bool,
    },

    /// Descriptor keys that scaffolding does not use
    KeysIgnored { keys: Vec<String> },

    /// A parent directory chain was ensured
    DirectoryEnsured { path: PathBuf },

    /// Artifact written
    ArtifactCreated { index: usize, path: PathBuf },

    /// Artifact left untouched because the target exists
    ArtifactSkipped { index: usize, path: PathBuf },

    /// Working directory ensured
    WorkingDirectoryEnsured { path: PathBuf },

    /// Pass completed
    Completed {
        created_count: usize,
        skipped_count: usize,
    },
}

/// Trait for receiving scaffold events
///
/// Implementations:
/// - `ConsoleEventSink`: verbosity-gated stderr lines
/// - `JsonEventSink`: NDJSON event stream
/// - `NoopEventSink`: silent
pub trait ScaffoldEventSink: Send + Sync {
    fn on_event(&self, event: ScaffoldEvent);

    /// Whether per-directory and per-artifact events are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ScaffoldEventSink for NoopEventSink {
    fn on_event(&self, _event: ScaffoldEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
