//! Application Layer
//!
//! Use cases that orchestrate domain entities over the ports.
//!
//! - `ScaffoldUseCase` - Materializes a catalog into a project tree

pub mod scaffold;

pub use scaffold::{scaffold, ScaffoldOptions, ScaffoldResult, ScaffoldUseCase};
