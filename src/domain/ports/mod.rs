//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod file_system;
pub mod scaffold_events;

pub use file_system::{CreateOutcome, FileSystem};
pub use scaffold_events::{NoopEventSink, ScaffoldEvent, ScaffoldEventSink};
