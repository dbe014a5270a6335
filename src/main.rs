//! Shepherd CLI
//!
//! Usage: shepherd [init] [PROJECT_FILE]

mod commands;

use clap::Parser;

use shepherd::presentation::{Cli, Commands};
use shepherd::ShepherdError;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command_or_default() {
        Commands::Init {
            project_file,
            dry_run,
        } => commands::init::cmd_init(project_file, dry_run, cli.json, cli.verbose, cli.color),
    };

    if let Err(e) = result {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "error",
                    "command": "init",
                    "kind": error_kind(&e),
                    "message": format!("{e:#}"),
                })
            );
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ShepherdError>() {
        Some(ShepherdError::DescriptorParse { .. }) => "descriptor_parse",
        Some(ShepherdError::DescriptorShape { .. }) => "descriptor_shape",
        Some(ShepherdError::Filesystem { .. }) => "filesystem",
        Some(ShepherdError::Catalog(_)) => "catalog",
        None => "other",
    }
}
