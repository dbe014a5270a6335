//! Console Event Sink
//!
//! Human-readable progress on stderr. The final summary is printed by the
//! presentation layer, so at verbosity 0 this sink stays quiet.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ScaffoldEvent, ScaffoldEventSink};

pub struct ConsoleEventSink {
    verbose: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: u8) -> Self {
        Self::with_writer(verbose, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbose: u8, writer: W) -> Self {
        Self {
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, message: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", message);
        }
    }
}

impl ScaffoldEventSink for ConsoleEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        if self.verbose == 0 {
            return;
        }
        match event {
            ScaffoldEvent::Started {
                root,
                artifact_count,
                dry_run,
                ..
            } => {
                let mode = if dry_run { " (dry run)" } else { "" };
                self.line(format!(
                    "scaffolding {} artifacts into {}{}",
                    artifact_count,
                    root.display(),
                    mode
                ));
            }
            ScaffoldEvent::KeysIgnored { keys } => {
                self.line(format!("ignoring descriptor keys: {}", keys.join(", ")));
            }
            ScaffoldEvent::DirectoryEnsured { path } if self.verbose > 1 => {
                self.line(format!("mkdir {}", path.display()));
            }
            ScaffoldEvent::ArtifactCreated { index, path } if self.verbose > 1 => {
                self.line(format!("[{}] write {}", index, path.display()));
            }
            ScaffoldEvent::ArtifactSkipped { index, path } if self.verbose > 1 => {
                self.line(format!("[{}] keep {}", index, path.display()));
            }
            ScaffoldEvent::WorkingDirectoryEnsured { path } => {
                self.line(format!("working directory {}", path.display()));
            }
            _ => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 0
    }
}
