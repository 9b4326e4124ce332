use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use agentq_client::QuerySession;
use agentq_core::{ClientConfig, ConversationId, SessionPhase};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/health".to_string(), "/session".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[derive(Parser)]
#[command(name = "agentq")]
#[command(about = "AGENTQ - Terminal console for the multi-agent assistant service", long_about = None)]
struct Cli {
    /// Base URL of the query service; falls back to AGENTQ_ENDPOINT, then
    /// the default local address
    #[arg(long)]
    endpoint: Option<String>,

    /// Pin the conversation id instead of generating a fresh one
    #[arg(long)]
    conversation_id: Option<String>,
}

/// The main entry point for the agentq terminal console.
///
/// This async function sets up a rustyline-based REPL that:
/// 1. Resolves the service endpoint and creates the query session
/// 2. Provides command completion for /health and /session
/// 3. Submits non-command input as queries and renders the outcome
/// 4. Displays colored output for user, agent, and system messages
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to the subscriber; user-facing output stays on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::resolve(cli.endpoint)?;
    let mut session = match cli.conversation_id {
        Some(id) => QuerySession::with_conversation_id(&config, ConversationId::from_string(id)),
        None => QuerySession::new(&config),
    };

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== NewWebCo AI Assistant ===".bright_magenta().bold());
    println!("{}", format!("Connected to {}", config.endpoint).bright_black());
    println!(
        "{}",
        "Ask me anything. '/health' probes the service, '/session' shows the conversation id, 'quit' exits."
            .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Empty input is silently blocked; no request is issued
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if let Some(command) = trimmed.strip_prefix('/') {
                    run_command(command, &session).await;
                    continue;
                }

                // Display user input in green
                println!("{}", format!("> {}", trimmed).green());
                println!("{}", "Processing...".bright_black());

                // The raw line is submitted untrimmed; trimming only gates
                // submission. Input is not read again until the submission
                // settles, so at most one request is in flight.
                let phase = session.submit(&line).await;
                render_phase(phase);
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Executes a slash command against the current session.
async fn run_command(command: &str, session: &QuerySession) {
    match command {
        "health" => match session.client().health().await {
            Ok(health) => {
                println!(
                    "{}",
                    format!("Service status: {}", health.status).bright_blue()
                );
                if !health.document_collections.is_empty() {
                    println!(
                        "{}",
                        format!(
                            "Document collections: {}",
                            health.document_collections.join(", ")
                        )
                        .bright_black()
                    );
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "health probe failed");
                println!("{}", "Service is unreachable.".red());
            }
        },
        "session" => {
            println!(
                "{}",
                format!("Conversation id: {}", session.conversation_id()).bright_blue()
            );
        }
        _ => {
            println!("{}", "Unknown command".bright_black());
        }
    }
}

/// Renders the session phase after a submission settles.
///
/// Error shows the generic message only; Success shows the handling agent,
/// the verbatim response text, and a sources list only when the result
/// carries sources.
fn render_phase(phase: &SessionPhase) {
    match phase {
        SessionPhase::Idle | SessionPhase::Loading => {}
        SessionPhase::Error { message } => {
            println!("{}", message.red());
            println!();
        }
        SessionPhase::Success { result } => {
            println!(
                "{} {}",
                "Handling Agent:".bright_magenta(),
                result.agent.label().bright_magenta().bold()
            );
            for line in result.response.lines() {
                println!("{}", line.bright_blue());
            }
            if !result.sources.is_empty() {
                println!("{}", "Sources:".bright_black());
                for source in &result.sources {
                    println!("{}", format!("  - {}", source.display_line()).bright_black());
                }
            }
            println!();
        }
    }
}
