//! Runtime configuration
//!
//! Resolves CLI flags against environment overrides (`SHEPHERD_*`, `NO_COLOR`).
//! Environment lookups go through a closure so resolution is testable.

use std::path::PathBuf;

use crate::presentation::ColorWhen;

/// Descriptor read when no path is given
pub const DEFAULT_PROJECT_FILE: &str = "project.yaml";

pub const PROJECT_FILE_ENV: &str = "SHEPHERD_PROJECT_FILE";
pub const COLOR_ENV: &str = "SHEPHERD_COLOR";

/// Settings for one `init` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    pub project_file: PathBuf,
    pub dry_run: bool,
    pub json: bool,
    pub verbose: u8,
    pub color: ColorWhen,
}

impl InitConfig {
    pub fn from_process_env(
        project_file: Option<PathBuf>,
        dry_run: bool,
        json: bool,
        verbose: u8,
        color: Option<ColorWhen>,
    ) -> Self {
        Self::resolve(project_file, dry_run, json, verbose, color, |key| {
            std::env::var(key).ok()
        })
    }

    pub fn resolve(
        project_file: Option<PathBuf>,
        dry_run: bool,
        json: bool,
        verbose: u8,
        color: Option<ColorWhen>,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let project_file = project_file
            .or_else(|| {
                get_env(PROJECT_FILE_ENV)
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_FILE));

        let color = color.unwrap_or_else(|| {
            if get_env("NO_COLOR").is_some() {
                ColorWhen::Never
            } else {
                get_env(COLOR_ENV)
                    .and_then(|v| ColorWhen::parse(&v))
                    .unwrap_or(ColorWhen::Auto)
            }
        });

        Self {
            project_file,
            dry_run,
            json,
            verbose,
            color,
        }
    }

    /// Whether the text summary should be colored on this terminal
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self.color {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => is_tty && !self.json,
        }
    }
}
