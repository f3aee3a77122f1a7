//! Command-line interface definition and dispatch for gitgud.
//!
//! Uses [`clap`] for argument parsing with derive macros. Running gitgud
//! with no subcommand starts the interactive chat. Guarded workflow errors
//! are printed and the process still exits 0; only setup faults (bad
//! config path, unreachable MCP server) propagate.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;

use crate::config::{self, Settings};
use crate::mcp::{self, ToolProvider};
use crate::provider::Provider;
use crate::tools::ToolRegistry;
use crate::{chat, commit};

/// Top-level CLI structure for gitgud.
#[derive(Parser)]
#[command(name = "gitgud", about = "A git and GitHub assistant for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the gitgud CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by
/// clap. No subcommand defaults to `chat`.
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default)
    Chat,
    /// Create a commit tied to one of your open assigned issues
    Commit {
        /// GitHub organization to search; falls back to the configured default
        org: Option<String>,
    },
    /// List the tools exposed by the connected MCP servers
    Tools,
    /// Prompt for and persist all settings
    Config,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat().await,
        Commands::Commit { org } => run_commit(org).await,
        Commands::Tools => run_tools().await,
        Commands::Config => {
            let mut settings = Settings::load()?;
            config::prompt::configure_all(&mut settings)
        }
    }
}

/// Loads settings and prompts for any missing required fields.
fn load_settings() -> Result<Settings> {
    let mut settings = Settings::load()?;
    config::prompt::ensure_complete(&mut settings)?;
    Ok(settings)
}

/// Spawns the git and GitHub MCP servers.
async fn connect_providers(
    settings: &Settings,
) -> Result<(Arc<ToolProvider>, Arc<ToolProvider>)> {
    println!("{}", "Connecting to MCP servers...".dimmed());
    let git = Arc::new(ToolProvider::spawn(mcp::git_server()).await?);
    let github = Arc::new(ToolProvider::spawn(mcp::github_server(settings)).await?);
    Ok((git, github))
}

async fn run_chat() -> Result<()> {
    let settings = load_settings()?;
    let provider = Provider::from_settings(&settings)?;
    let (git, github) = connect_providers(&settings).await?;

    let registry = ToolRegistry::from_providers(&[Arc::clone(&git), Arc::clone(&github)]).await?;
    println!(
        "{}",
        format!("{} tools registered", registry.len()).dimmed()
    );

    let result = chat::run_chat(&provider, &registry).await;

    git.shutdown();
    github.shutdown();
    result
}

async fn run_commit(org: Option<String>) -> Result<()> {
    let settings = load_settings()?;

    let org = match org.or_else(|| {
        let default = settings.github.default_org.trim();
        (!default.is_empty()).then(|| default.to_string())
    }) {
        Some(org) => org,
        None => {
            eprintln!(
                "{} No organization given and no default configured.",
                "error:".red().bold()
            );
            eprintln!("Usage: gitgud commit <org>  (or set a default via `gitgud config`)");
            return Ok(());
        }
    };

    let provider = Provider::from_settings(&settings)?;
    let (git, github) = connect_providers(&settings).await?;

    // Workflow failures are reported, not fatal to the process
    if let Err(e) = commit::run(&org, &git, &github, &provider).await {
        eprintln!("{} {}", "error:".red().bold(), e);
    }

    git.shutdown();
    github.shutdown();
    Ok(())
}

async fn run_tools() -> Result<()> {
    let settings = load_settings()?;
    let (git, github) = connect_providers(&settings).await?;

    for provider in [&git, &github] {
        println!();
        println!("{}", provider.label().bold().cyan());
        for tool in provider.list_tools().await? {
            println!("  {}  {}", tool.name.green(), tool.description.dimmed());
        }
    }

    git.shutdown();
    github.shutdown();
    Ok(())
}
