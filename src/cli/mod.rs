//! Command-line interface.

pub mod completions;
pub mod eject;
pub mod generate;
pub mod init;
pub mod login;
pub mod output;

use clap::{Parser, Subcommand};

/// Understudy - record login roles and generate Playwright tests.
#[derive(Parser)]
#[command(
    name = "understudy",
    about = "Record login roles and generate Playwright tests",
    version,
    after_help = "Learn the part. Run the show. 🎭"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Scaffold a Playwright test project in the current directory
    Init {
        /// Playwright config path
        #[arg(long, value_name = "PATH")]
        config_path: Option<String>,
        /// Directory for generated tests
        #[arg(long, value_name = "DIR")]
        test_dir: Option<String>,
        /// Application URL tests run against
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Directory for recorded storage-state files
        #[arg(long, value_name = "DIR")]
        auth_dir: Option<String>,
        /// Env file secrets are appended to
        #[arg(long, value_name = "FILE")]
        env_file: Option<String>,
        /// Skip GitHub Actions workflow scaffolding
        #[arg(long)]
        no_ci: bool,
        /// Accept all defaults without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Record a login flow and register it as a role
    Login {
        /// Role name (e.g. admin)
        #[arg(value_name = "ROLE")]
        role: Option<String>,
        /// Role name (flag form)
        #[arg(long = "role", value_name = "ROLE", conflicts_with = "role")]
        role_flag: Option<String>,
        /// Re-record the credential state of an existing role
        #[arg(long)]
        refresh: bool,
    },

    /// Generate a test from a natural-language description
    Generate {
        /// What the test should verify, in plain language
        #[arg(value_name = "DESCRIPTION")]
        description: String,
        /// Role whose saved session the test runs under
        #[arg(short, long, value_name = "ROLE")]
        role: String,
        /// Print the full instruction sent to the agent
        #[arg(long)]
        show_prompt: bool,
    },

    /// Remove tool-owned files and registry entries
    Eject {
        /// Remove only this role's artifacts
        #[arg(long, value_name = "ROLE")]
        role: Option<String>,
        /// Preview removals without touching anything
        #[arg(long)]
        dry_run: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init {
            config_path,
            test_dir,
            base_url,
            auth_dir,
            env_file,
            no_ci,
            yes,
        } => init::execute(init::InitOptions {
            config_path,
            test_dir,
            base_url,
            auth_dir,
            env_file,
            no_ci,
            yes,
        }),
        Login {
            role,
            role_flag,
            refresh,
        } => login::execute(role_flag.or(role), refresh),
        Generate {
            description,
            role,
            show_prompt,
        } => generate::execute(&role, &description, show_prompt),
        Eject {
            role,
            dry_run,
            force,
        } => eject::execute(role.as_deref(), dry_run, force),
        Completions { shell } => completions::execute(shell),
    }
}
