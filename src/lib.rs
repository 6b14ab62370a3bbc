//! Understudy - record login roles and generate Playwright tests.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Scaffold a test project
//! │   ├── login         # Record a role's login flow
//! │   ├── generate      # Generate a test from a description
//! │   ├── eject         # Remove tool-owned files
//! │   └── completions   # Shell completions
//! ├── core/             # Core library components
//! │   ├── config        # .understudy.toml management
//! │   ├── roles         # Role registry
//! │   ├── detect        # Credential detection in recorded scripts
//! │   ├── naming        # Environment variable name derivation
//! │   ├── redact        # Secret redaction in recorded scripts
//! │   ├── envfile       # .env / .env.example append operations
//! │   └── scaffold      # Embedded project templates
//! ├── agent/            # AI coding agent subprocess client
//! └── recorder          # Playwright codegen subprocess
//! ```
//!
//! # Features
//!
//! - One saved browser session per named role
//! - Recorded credentials rewritten to environment variable references
//! - Playwright config, auth setup, and CI workflow scaffolding
//! - Natural-language test generation through the Claude Code CLI

pub mod agent;
pub mod cli;
pub mod core;
pub mod error;
pub mod recorder;
