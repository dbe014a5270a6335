//! JSON Event Sink
//!
//! Outputs scaffold events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ScaffoldEvent, ScaffoldEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ScaffoldEventSink for JsonEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        let json = match event {
            ScaffoldEvent::Started {
                project,
                root,
                artifact_count,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": "init",
                "project": project,
                "root": root.display().to_string(),
                "artifact_count": artifact_count,
                "dry_run": dry_run,
            }),

            ScaffoldEvent::KeysIgnored { keys } => serde_json::json!({
                "event": "keys_ignored",
                "command": "init",
                "keys": keys,
            }),

            ScaffoldEvent::DirectoryEnsured { path } => serde_json::json!({
                "event": "dir_created",
                "command": "init",
                "path": path.display().to_string(),
            }),

            ScaffoldEvent::ArtifactCreated { index, path } => serde_json::json!({
                "event": "item_created",
                "command": "init",
                "index": index,
                "path": path.display().to_string(),
            }),

            ScaffoldEvent::ArtifactSkipped { index, path } => serde_json::json!({
                "event": "item_skipped",
                "command": "init",
                "index": index,
                "path": path.display().to_string(),
                "reason": "exists",
            }),

            ScaffoldEvent::WorkingDirectoryEnsured { path } => serde_json::json!({
                "event": "working_directory",
                "command": "init",
                "path": path.display().to_string(),
            }),

            ScaffoldEvent::Completed {
                created_count,
                skipped_count,
            } => serde_json::json!({
                "event": "complete",
                "command": "init",
                "status": "success",
                "created": created_count,
                "skipped": skipped_count,
            }),
        };

        self.write_event(json);
    }
}
