//! AI coding agent subprocess client.
//!
//! Wraps the Claude Code CLI: builds the invocation, consumes the streamed
//! JSON message sequence line by line, and reports the terminal result. The
//! agent itself is opaque; this module only trusts its result flag.

pub mod mutations;

use std::io::{BufRead, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use crate::cli::output;
use crate::error::{AgentError, Result};

/// Default turn budget for agent runs.
const DEFAULT_MAX_TURNS: u32 = 10;

/// Default edit-capable tool allow-list.
const DEFAULT_ALLOWED_TOOLS: &[&str] = &["Read", "Edit", "Write"];

/// Outcome of a successful agent run.
#[derive(Debug, Clone, Default)]
pub struct AgentRunReport {
    /// Accumulated assistant text
    pub text: String,
    /// Names of tools the agent invoked, in order
    pub tools_used: Vec<String>,
    /// Reported cost in USD
    pub cost_usd: Option<f64>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: Option<u64>,
    /// Number of turns consumed
    pub num_turns: Option<u32>,
}

/// Terminal result message of an agent stream.
#[derive(Debug, Deserialize)]
struct ResultMessage {
    subtype: String,
    #[serde(default)]
    is_error: bool,
    #[serde(default)]
    total_cost_usd: Option<f64>,
    #[serde(default)]
    duration_ms: Option<u64>,
    #[serde(default)]
    num_turns: Option<u32>,
    #[serde(default)]
    result: Option<String>,
}

/// Accumulated state of one streamed run.
#[derive(Default)]
struct StreamAccumulator {
    text: String,
    tools_used: Vec<String>,
    result: Option<ResultMessage>,
}

impl StreamAccumulator {
    /// Fold one stream-json line into the accumulator.
    ///
    /// Unknown message types are ignored; the stream format grows fields
    /// over time.
    fn absorb_line(&mut self, line: &str) -> std::result::Result<(), AgentError> {
        let msg: serde_json::Value = serde_json::from_str(line)?;
        let kind = msg["type"].as_str().map(str::to_owned);

        match kind.as_deref() {
            Some("assistant") => {
                if let Some(content) = msg["message"]["content"].as_array() {
                    for item in content {
                        match item["type"].as_str() {
                            Some("text") => {
                                if let Some(text) = item["text"].as_str() {
                                    self.text.push_str(text);
                                    self.text.push('\n');
                                }
                            }
                            Some("tool_use") => {
                                if let Some(name) = item["name"].as_str() {
                                    self.tools_used.push(name.to_string());
                                    output::dimmed(&format!("  agent: {}", name));
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
            Some("result") => {
                self.result = Some(serde_json::from_value(msg)?);
            }
            Some(other) => debug!(kind = other, "stream message"),
            None => debug!("stream message without type"),
        }

        Ok(())
    }
}

/// Client for the `claude` CLI.
pub struct AgentClient {
    binary: PathBuf,
    workdir: PathBuf,
    max_turns: u32,
    allowed_tools: Vec<String>,
    api_key: Option<String>,
}

impl AgentClient {
    /// Locate the agent binary and build a client for the given directory.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::BinaryNotFound` if `claude` is not on PATH.
    pub fn new(workdir: PathBuf) -> Result<Self> {
        let binary =
            which::which("claude").map_err(|_| AgentError::BinaryNotFound("claude".into()))?;

        Ok(Self {
            binary,
            workdir,
            max_turns: DEFAULT_MAX_TURNS,
            allowed_tools: DEFAULT_ALLOWED_TOOLS.iter().map(|t| t.to_string()).collect(),
            api_key: None,
        })
    }

    /// Override the turn budget.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Override the tool allow-list.
    pub fn with_allowed_tools(mut self, tools: Vec<String>) -> Self {
        self.allowed_tools = tools;
        self
    }

    /// Make sure the agent will be able to authenticate.
    ///
    /// Accepts `ANTHROPIC_API_KEY` from the environment or an existing
    /// `claude login` session; otherwise prompts for a key interactively.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::MissingCredentials` if no key is available and
    /// the prompt is declined or unavailable.
    pub fn ensure_credentials(&mut self) -> Result<()> {
        if std::env::var("ANTHROPIC_API_KEY").is_ok_and(|v| !v.is_empty()) {
            return Ok(());
        }

        if let Some(home) = dirs::home_dir() {
            // `claude login` leaves its session state under ~/.claude
            if home.join(".claude").exists() || home.join(".claude.json").exists() {
                return Ok(());
            }
        }

        if !std::io::stdin().is_terminal() {
            return Err(AgentError::MissingCredentials.into());
        }

        output::warn("no API key found");
        let key: String = dialoguer::Password::new()
            .with_prompt("Anthropic API key (leave empty to abort)")
            .allow_empty_password(true)
            .interact()?;

        if key.is_empty() {
            return Err(AgentError::MissingCredentials.into());
        }

        self.api_key = Some(key);
        Ok(())
    }

    /// Run one instruction to completion.
    ///
    /// Blocks while consuming the stream; assistant text and tool names are
    /// surfaced incrementally. Returns a report on success.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::TurnsExhausted` when the turn budget ran out,
    /// `AgentError::Execution` for agent-reported or process-level failure,
    /// and `AgentError::Stream` for malformed stream messages.
    pub fn run(&self, instruction: &str) -> Result<AgentRunReport> {
        debug!(turns = self.max_turns, "starting agent run");

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-p")
            .arg(instruction)
            .args(["--output-format", "stream-json", "--verbose"])
            .arg("--max-turns")
            .arg(self.max_turns.to_string())
            .arg("--allowedTools")
            .arg(self.allowed_tools.join(","))
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if let Some(key) = &self.api_key {
            cmd.env("ANTHROPIC_API_KEY", key);
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| AgentError::Execution(format!("failed to spawn agent: {}", e)))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AgentError::Execution("agent stdout unavailable".into()))?;

        let mut acc = StreamAccumulator::default();
        for line in BufReader::new(stdout).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            acc.absorb_line(&line)?;
        }

        let status = child.wait()?;

        let Some(result) = acc.result else {
            return Err(AgentError::Execution(format!(
                "agent exited with status {} before reporting a result",
                status.code().unwrap_or(-1)
            ))
            .into());
        };

        if result.subtype == "error_max_turns" {
            return Err(AgentError::TurnsExhausted.into());
        }
        if result.is_error {
            let detail = result
                .result
                .unwrap_or_else(|| format!("subtype: {}", result.subtype));
            return Err(AgentError::Execution(detail).into());
        }

        debug!(
            cost = ?result.total_cost_usd,
            turns = ?result.num_turns,
            "agent run finished"
        );

        Ok(AgentRunReport {
            text: acc.text,
            tools_used: acc.tools_used,
            cost_usd: result.total_cost_usd,
            duration_ms: result.duration_ms,
            num_turns: result.num_turns,
        })
    }
}
