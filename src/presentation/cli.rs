//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by subcommands.
//! Running without a subcommand behaves like `shepherd init`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Shepherd - scaffold .deepagents/ for the ShepherdAI PM agent
#[derive(Parser, Debug)]
#[command(name = "shepherd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of the text summary
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Scaffold .deepagents/ from a project descriptor (never overwrites)
    Init {
        /// Path to project.yaml (default: project.yaml)
        project_file: Option<PathBuf>,

        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// The subcommand, with a bare invocation mapped to `init`
    pub fn command_or_default(&self) -> Commands {
        match &self.command {
            Some(Commands::Init {
                project_file,
                dry_run,
            }) => Commands::Init {
                project_file: project_file.clone(),
                dry_run: *dry_run,
            },
            None => Commands::Init {
                project_file: None,
                dry_run: false,
            },
        }
    }
}
