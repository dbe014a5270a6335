//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All I/O lives here.
//!
//! - `fs/` - Local filesystem (and an in-memory test double)
//! - `config/` - `project.yaml` descriptor loading
//! - `events/` - Console and NDJSON event sinks

pub mod config;
pub mod events;
pub mod fs;

pub use config::load_descriptor;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
