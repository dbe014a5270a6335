//! Output Rendering
//!
//! The text summary printed after `shepherd init`.

use std::fmt::Write as _;

use crossterm::style::Stylize;

use crate::application::ScaffoldResult;
use crate::templates::RUN_HINT;

/// Text renderer for scaffold results
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Header, one line per created then skipped path, blank line, run hint
    pub fn render(&self, project: &str, result: &ScaffoldResult) -> String {
        let mut out = String::new();
        let prefix = if result.is_dry_run() { "[dry run] " } else { "" };
        let _ = writeln!(out, "{prefix}Initialized ShepherdAI for project '{project}'");

        let created = self.label("created:", true);
        for path in result.created() {
            let _ = writeln!(out, "  {} {}", created, path.display());
        }
        let skipped = self.label("skipped (exists):", false);
        for path in result.skipped() {
            let _ = writeln!(out, "  {} {}", skipped, path.display());
        }

        out.push('\n');
        let _ = writeln!(out, "{RUN_HINT}");
        out
    }

    pub fn print(&self, project: &str, result: &ScaffoldResult) {
        print!("{}", self.render(project, result));
    }

    fn label(&self, text: &str, created: bool) -> String {
        match (self.color, created) {
            (false, _) => text.to_string(),
            (true, true) => text.green().to_string(),
            (true, false) => text.dark_yellow().to_string(),
        }
    }
}
