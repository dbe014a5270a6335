//! Init command - scaffold .deepagents/ from a project descriptor

use is_terminal::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};

use shepherd::config::InitConfig;
use shepherd::domain::ports::ScaffoldEventSink;
use shepherd::infrastructure::{ConsoleEventSink, JsonEventSink};
use shepherd::presentation::{create_scaffold_use_case, ColorWhen, TextRenderer};
use shepherd::{load_descriptor, ArtifactCatalog, ScaffoldOptions};

pub fn cmd_init(
    project_file: Option<PathBuf>,
    dry_run: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = InitConfig::from_process_env(project_file, dry_run, json, verbose, color);

    // Validate before touching the filesystem.
    let descriptor = load_descriptor(&config.project_file)?;

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let options = ScaffoldOptions::new(&cwd)
        .with_working_dir_base(&cwd)
        .with_dry_run(config.dry_run);

    let events: Box<dyn ScaffoldEventSink> = if config.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stderr(config.verbose))
    };

    let result = create_scaffold_use_case().execute_with_events(
        &descriptor,
        ArtifactCatalog::builtin(),
        &options,
        events.as_ref(),
    )?;

    if !config.json {
        let color = config.use_color(std::io::stdout().is_terminal());
        TextRenderer::new(color).print(descriptor.name(), &result);
    }

    Ok(())
}
