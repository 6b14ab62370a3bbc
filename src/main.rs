//! Understudy - record login roles and generate Playwright tests.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use understudy::cli::output;
use understudy::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("UNDERSTUDY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("understudy=debug")
        } else {
            EnvFilter::new("understudy=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            understudy::error::Error::Config(understudy::error::ConfigError::NotInitialized) => {
                Some("run: understudy init")
            }
            understudy::error::Error::Agent(understudy::error::AgentError::MissingCredentials) => {
                Some("set ANTHROPIC_API_KEY or run: claude login")
            }
            understudy::error::Error::Recorder(
                understudy::error::RecorderError::BinaryNotFound(_),
            ) => Some("install Playwright: npm i -D @playwright/test && npx playwright install"),
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
