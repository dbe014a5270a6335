//! Event Sink Implementations
//!
//! - `JsonEventSink`: NDJSON output for CI/automation
//! - `ConsoleEventSink`: verbosity-gated progress on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
