//! Built-in artifact catalog
//!
//! The `.deepagents/` tree for the ShepherdAI project-manager agent: one
//! PM agent, one developer subagent, and the skills they share.

use std::sync::OnceLock;

use crate::domain::entities::ArtifactCatalog;

/// Directory all built-in artifacts live under
pub const DEEPAGENTS_DIR: &str = ".deepagents";

/// Instruction printed after a successful init
pub const RUN_HINT: &str = "Run:  deepagents --agent shepherd";

const PM_AGENTS_MD: &str = include_str!("../templates/pm_agents.md");
const DEVELOPER_AGENTS_MD: &str = include_str!("../templates/developer_agents.md");
const CLAUDE_CODE_SKILL_MD: &str = include_str!("../templates/skills/claude-code.md");
const TEST_RUNNER_SKILL_MD: &str = include_str!("../templates/skills/test-runner.md");
const TASK_DECOMPOSITION_SKILL_MD: &str =
    include_str!("../templates/skills/task-decomposition.md");
const CODE_REVIEW_SKILL_MD: &str = include_str!("../templates/skills/code-review.md");
const DEBUGGING_SKILL_MD: &str = include_str!("../templates/skills/debugging.md");
const ENVIRONMENT_SETUP_SKILL_MD: &str = include_str!("../templates/skills/environment-setup.md");
const DEPENDENCY_MANAGEMENT_SKILL_MD: &str =
    include_str!("../templates/skills/dependency-management.md");
const GIT_WORKFLOW_SKILL_MD: &str = include_str!("../templates/skills/git-workflow.md");
const PROGRESS_REPORTING_SKILL_MD: &str =
    include_str!("../templates/skills/progress-reporting.md");
const ERROR_ANALYSIS_SKILL_MD: &str = include_str!("../templates/skills/error-analysis.md");

const BUILTIN: &[(&str, &str, &str)] = &[
    ("pm-agent", ".deepagents/AGENTS.md", PM_AGENTS_MD),
    (
        "developer-agent",
        ".deepagents/agents/developer/AGENTS.md",
        DEVELOPER_AGENTS_MD,
    ),
    (
        "claude-code",
        ".deepagents/skills/claude-code/SKILL.md",
        CLAUDE_CODE_SKILL_MD,
    ),
    (
        "test-runner",
        ".deepagents/skills/test-runner/SKILL.md",
        TEST_RUNNER_SKILL_MD,
    ),
    (
        "task-decomposition",
        ".deepagents/skills/task-decomposition/SKILL.md",
        TASK_DECOMPOSITION_SKILL_MD,
    ),
    (
        "code-review",
        ".deepagents/skills/code-review/SKILL.md",
        CODE_REVIEW_SKILL_MD,
    ),
    (
        "debugging",
        ".deepagents/skills/debugging/SKILL.md",
        DEBUGGING_SKILL_MD,
    ),
    (
        "environment-setup",
        ".deepagents/skills/environment-setup/SKILL.md",
        ENVIRONMENT_SETUP_SKILL_MD,
    ),
    (
        "dependency-management",
        ".deepagents/skills/dependency-management/SKILL.md",
        DEPENDENCY_MANAGEMENT_SKILL_MD,
    ),
    (
        "git-workflow",
        ".deepagents/skills/git-workflow/SKILL.md",
        GIT_WORKFLOW_SKILL_MD,
    ),
    (
        "progress-reporting",
        ".deepagents/skills/progress-reporting/SKILL.md",
        PROGRESS_REPORTING_SKILL_MD,
    ),
    (
        "error-analysis",
        ".deepagents/skills/error-analysis/SKILL.md",
        ERROR_ANALYSIS_SKILL_MD,
    ),
];

static CATALOG: OnceLock<ArtifactCatalog> = OnceLock::new();

impl ArtifactCatalog {
    /// The process-wide built-in catalog
    pub fn builtin() -> &'static ArtifactCatalog {
        CATALOG.get_or_init(|| match ArtifactCatalog::from_static(BUILTIN) {
            Ok(catalog) => catalog,
            // BUILTIN is a compile-time table covered by tests below.
            Err(e) => panic!("built-in catalog is invalid: {e}"),
        })
    }
}
