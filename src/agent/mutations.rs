//! Agent-driven edits to externally-owned files.
//!
//! The Playwright config, the auth setup script, and the CI workflow are not
//! parsed by this tool; per-role edits to them are described in natural
//! language and delegated to the agent. Every edit is best-effort: on
//! failure the exact manual change is printed and the surrounding command
//! carries on, so the artifacts this tool does own stay consistent.

use tracing::warn;

use crate::agent::AgentClient;
use crate::cli::output;
use crate::core::config::{ProjectConfig, Role};
use crate::core::scaffold;
use crate::error::Result;

/// One delegated edit to an externally-owned file.
#[derive(Debug, Clone)]
pub struct Mutation {
    /// Short progress label, e.g. "updating playwright config"
    pub label: String,
    /// File the edit applies to
    pub target: String,
    /// Natural-language instruction handed to the agent
    pub instruction: String,
    /// Exact manual edit shown when the agent fails
    pub manual: String,
}

/// Applies a described edit to an externally-owned file.
///
/// The default strategy hands the instruction to the coding agent. A
/// deterministic parser-based strategy can slot in without touching callers;
/// nothing here re-parses the file afterwards, so whichever strategy runs is
/// trusted on its word.
pub trait MutationStrategy {
    fn apply(&self, mutation: &Mutation) -> Result<()>;
}

/// Strategy that delegates edits to the coding agent.
pub struct AgentStrategy<'a> {
    agent: &'a AgentClient,
}

impl<'a> AgentStrategy<'a> {
    pub fn new(agent: &'a AgentClient) -> Self {
        Self { agent }
    }
}

impl MutationStrategy for AgentStrategy<'_> {
    fn apply(&self, mutation: &Mutation) -> Result<()> {
        self.agent.run(&mutation.instruction).map(|_| ())
    }
}

/// Edits that register a role in the external artifacts.
pub fn role_registration(config: &ProjectConfig, role: &Role) -> Vec<Mutation> {
    let mut mutations = Vec::new();
    let env_vars = role.env_vars.clone().unwrap_or_default();

    let project_block = scaffold::role_project_block(role);
    mutations.push(Mutation {
        label: "updating playwright config".to_string(),
        target: config.project.playwright_config.clone(),
        instruction: format!(
            "In {path}, add the following entry to the `projects` array of the \
             Playwright config, after the existing `setup` project. Do not change \
             anything else; keep formatting consistent with the file.\n\n{block}",
            path = config.project.playwright_config,
            block = project_block,
        ),
        manual: format!("Add to the `projects` array in {}:\n\n{}",
            config.project.playwright_config, project_block),
    });

    if config.setup.enabled {
        let setup_block = scaffold::role_setup_block(role, &env_vars);
        mutations.push(Mutation {
            label: "updating auth setup script".to_string(),
            target: config.setup.path.clone(),
            instruction: format!(
                "In {path}, insert the following setup step between the \
                 `understudy:roles:start` and `understudy:roles:end` markers. If a \
                 step authenticating '{role}' already exists, replace it. Do not \
                 change anything else.\n\n{block}",
                path = config.setup.path,
                role = role.name,
                block = setup_block,
            ),
            manual: format!(
                "Add between the role markers in {}:\n\n{}",
                config.setup.path, setup_block
            ),
        });
    }

    if config.github_actions.enabled && !env_vars.is_empty() {
        let env_lines = scaffold::workflow_env_lines(&env_vars);
        mutations.push(Mutation {
            label: "updating CI workflow".to_string(),
            target: config.github_actions.path.clone(),
            instruction: format!(
                "In {path}, append the following lines to the `env:` block of the \
                 step that runs `npx playwright test` (add the block if it is \
                 missing). Keep every existing entry.\n\n{lines}",
                path = config.github_actions.path,
                lines = env_lines,
            ),
            manual: format!(
                "Add under the `env:` of the Playwright test step in {}:\n\n{}",
                config.github_actions.path, env_lines
            ),
        });
    }

    mutations
}

/// Edits that remove a role from the external artifacts.
pub fn role_removal(config: &ProjectConfig, role: &Role) -> Vec<Mutation> {
    let mut mutations = Vec::new();

    mutations.push(Mutation {
        label: "cleaning playwright config".to_string(),
        target: config.project.playwright_config.clone(),
        instruction: format!(
            "In {path}, remove the entry named \"{role}\" from the `projects` \
             array of the Playwright config. Do not change anything else.",
            path = config.project.playwright_config,
            role = role.name,
        ),
        manual: format!(
            "Remove the \"{}\" entry from the `projects` array in {}",
            role.name, config.project.playwright_config
        ),
    });

    if config.setup.enabled {
        mutations.push(Mutation {
            label: "cleaning auth setup script".to_string(),
            target: config.setup.path.clone(),
            instruction: format!(
                "In {path}, remove the setup step that authenticates '{role}' \
                 (between the understudy role markers). Do not change anything else.",
                path = config.setup.path,
                role = role.name,
            ),
            manual: format!(
                "Remove the '{}' setup step from {}",
                role.name, config.setup.path
            ),
        });
    }

    if config.github_actions.enabled {
        if let Some(env_vars) = role.env_vars.as_ref().filter(|v| !v.is_empty()) {
            mutations.push(Mutation {
                label: "cleaning CI workflow".to_string(),
                target: config.github_actions.path.clone(),
                instruction: format!(
                    "In {path}, remove the env entries {vars} from the step that \
                     runs `npx playwright test`. Keep every other entry.",
                    path = config.github_actions.path,
                    vars = env_vars.join(", "),
                ),
                manual: format!(
                    "Remove {} from the `env:` of the Playwright test step in {}",
                    env_vars.join(", "),
                    config.github_actions.path
                ),
            });
        }
    }

    mutations
}

/// Construct the agent and apply mutations, degrading to manual instructions.
///
/// An unavailable agent (missing binary, declined credentials) degrades the
/// same way a failed edit does: the manual instructions are printed and the
/// caller's workflow continues.
pub fn apply_or_degrade(mutations: &[Mutation]) {
    if mutations.is_empty() {
        return;
    }

    let workdir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            degrade(mutations, &format!("cannot resolve working directory: {}", e));
            return;
        }
    };

    match AgentClient::new(workdir) {
        Ok(mut agent) => match agent.ensure_credentials() {
            Ok(()) => {
                apply_best_effort(&AgentStrategy::new(&agent), mutations);
            }
            Err(e) => degrade(mutations, &e.to_string()),
        },
        Err(e) => degrade(mutations, &e.to_string()),
    }
}

/// Print the manual edit for every pending mutation.
fn degrade(mutations: &[Mutation], reason: &str) {
    output::warn(&format!("agent unavailable: {}", reason));
    for mutation in mutations {
        if std::path::Path::new(&mutation.target).exists() {
            output::manual_block(&mutation.target, &mutation.manual);
        }
    }
}

/// Apply mutations through a strategy, degrading to manual instructions.
///
/// Never fails: each mutation is independent, and a failed one is reported
/// with the exact edit to perform by hand. Returns how many applied cleanly.
pub fn apply_best_effort(strategy: &dyn MutationStrategy, mutations: &[Mutation]) -> usize {
    let mut applied = 0;

    for mutation in mutations {
        if !std::path::Path::new(&mutation.target).exists() {
            output::dimmed(&format!(
                "{} not found, skipping {}",
                mutation.target, mutation.label
            ));
            continue;
        }

        output::progress(&mutation.label);
        match strategy.apply(mutation) {
            Ok(()) => {
                output::progress_done(true);
                applied += 1;
            }
            Err(e) => {
                output::progress_done(false);
                warn!(target = %mutation.target, error = %e, "edit failed");
                output::warn(&format!("could not update {}: {}", mutation.target, e));
                output::manual_block(&mutation.target, &mutation.manual);
            }
        }
    }

    applied
}
