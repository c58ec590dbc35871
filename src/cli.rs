//! Command-line interface definition and dispatch for plume.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::agent;
use crate::chat;
use crate::config;
use crate::output::StdoutRenderer;
use crate::provider::{self, Generate, ModelSelection};
use crate::tools::ToolRegistry;

/// Top-level CLI structure for plume.
///
/// Parsed from command-line arguments via [`clap::Parser`]. Contains a single
/// required subcommand that determines which action plume performs.
#[derive(Parser)]
#[command(name = "plume", about = "A multifunctional writing-assistant agent")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the plume CLI.
///
/// Each variant maps to a top-level action. The `///` doc comments on variants
/// double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Ask a one-shot question
    Ask {
        /// The question or task
        prompt: Vec<String>,
        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
        /// Provider to use (anthropic, openai, openrouter, ollama)
        #[arg(short, long)]
        provider: Option<String>,
        /// Maximum think/act turns (overrides config)
        #[arg(short = 't', long)]
        max_turns: Option<usize>,
        /// Also write the answer to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start an interactive chat session
    Chat {
        /// Provider to use (anthropic, openai, openrouter, ollama)
        #[arg(long)]
        provider: Option<String>,
        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
        /// Maximum think/act turns (overrides config)
        #[arg(short = 't', long)]
        max_turns: Option<usize>,
    },
    /// List available models
    Models,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `config` command.
///
/// Controls reading plume's TOML configuration file stored at the XDG
/// config path (`~/.config/plume/config.toml`).
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current config
    Show,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ask {
            prompt,
            model,
            provider: provider_name,
            max_turns,
            output,
        } => {
            let prompt = prompt.join(" ");
            if prompt.is_empty() {
                anyhow::bail!("No prompt provided. Usage: plume ask \"your question here\"");
            }

            let config = config::Config::load()?;
            let selection =
                ModelSelection::resolve(provider_name.as_deref(), model.as_deref(), &config)?;
            let max_turns = max_turns.unwrap_or_else(|| config.max_turns());

            println!(
                "{} [model: {}]",
                "plume".bold().cyan(),
                selection.model.yellow(),
            );
            println!();
            println!("{} {}", ">".green().bold(), prompt);
            println!();

            let generator: Arc<dyn Generate> =
                Arc::new(provider::Provider::from_config(&config, &selection)?);
            let tools = ToolRegistry::with_builtins(Arc::clone(&generator));

            let mut renderer = StdoutRenderer::new();
            let answer =
                agent::run_query(&*generator, &tools, &prompt, &mut renderer, max_turns).await?;

            println!("{}", answer);

            if let Some(path) = output {
                std::fs::write(&path, &answer)?;
                println!();
                println!("{}", format!("saved to {}", path.display()).dimmed());
            }

            Ok(())
        }
        Commands::Chat {
            provider: provider_name,
            model,
            max_turns,
        } => {
            let config = config::Config::load()?;
            let selection =
                ModelSelection::resolve(provider_name.as_deref(), model.as_deref(), &config)?;
            let max_turns = max_turns.unwrap_or_else(|| config.max_turns());
            chat::run_chat(config, &selection, max_turns).await
        }
        Commands::Models => {
            let config = config::Config::load()?;
            crate::provider::list_models(&config).await
        }
        Commands::Config { action } => {
            let config = config::Config::load()?;
            match action {
                ConfigAction::Show => {
                    let path = config::Config::config_path()?;
                    println!("{} {}", "Config path:".bold(), path.display());
                    println!();
                    let toml_str = toml::to_string_pretty(&config)?;
                    println!("{}", toml_str);
                }
            }
            Ok(())
        }
    }
}
