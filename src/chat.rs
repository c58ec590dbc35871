//! Interactive chat REPL for plume.
//!
//! Provides a readline loop using [`rustyline`] (history, line editing).
//! Each submitted line runs a fresh action loop with its own transcript:
//! the loop's contract is that a transcript is owned by exactly one
//! invocation, so queries do not share context across lines.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

use crate::agent;
use crate::config::Config;
use crate::output::StdoutRenderer;
use crate::provider::{Generate, ModelSelection, Provider};
use crate::tools::ToolRegistry;

/// Runs the interactive chat REPL.
///
/// Loads config, builds the provider, and enters a readline loop where each
/// user input seeds a new transcript and runs the bounded action loop.
///
/// # Readline behavior
///
/// - **Ctrl+C**: cancels current input, stays in REPL
/// - **Ctrl+D**: exits cleanly with "goodbye."
/// - Readline history is persisted to `~/.cache/plume/chat_history.txt`
/// - `/tools` prints the registered tool catalog
pub async fn run_chat(config: Config, selection: &ModelSelection, max_turns: usize) -> Result<()> {
    let provider: Arc<dyn Generate> = Arc::new(Provider::from_config(&config, selection)?);
    let tools = ToolRegistry::with_builtins(Arc::clone(&provider));

    println!(
        "{} [model: {}] [max turns: {}] (Ctrl+D to exit)",
        "plume chat".bold().cyan(),
        selection.model.yellow(),
        max_turns,
    );
    println!();

    // Set up readline with persistent history
    let mut rl = DefaultEditor::new()?;
    let history_path = Config::cache_dir()?.join(crate::constants::HISTORY_FILENAME);
    if history_path.exists() {
        let _ = rl.load_history(&history_path);
    }

    loop {
        let readline = rl.readline(&format!("{} ", ">".green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }

                if line == "/tools" {
                    println!("{}", tools.catalog());
                    println!();
                    continue;
                }

                let _ = rl.add_history_entry(&line);
                println!();

                let mut renderer = StdoutRenderer::new();
                match agent::run_query(&*provider, &tools, &line, &mut renderer, max_turns).await {
                    Ok(answer) => {
                        println!("{}", answer);
                    }
                    Err(e) => {
                        eprintln!("{} {:#}", "error:".red().bold(), anyhow::Error::from(e));
                    }
                }
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "goodbye.".dimmed());
                break;
            }
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                break;
            }
        }
    }

    // Save readline history
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = rl.save_history(&history_path);

    Ok(())
}
