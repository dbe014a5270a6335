//! Presentation Layer
//!
//! - `cli` - Argument parsing (clap)
//! - `factory` - Use cases wired to local infrastructure
//! - `output` - Text summary rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_scaffold_use_case;
pub use output::TextRenderer;
