//! Output rendering abstraction for plume.
//!
//! Defines the [`Renderer`] trait that decouples action-loop progress from
//! the display layer. [`StdoutRenderer`] prints progress lines to the
//! terminal; [`NullRenderer`] discards everything and is used by tests and
//! by callers that only want the final answer.

use colored::Colorize;
use std::collections::HashMap;

/// Trait for rendering action-loop progress.
pub trait Renderer {
    /// Called when the loop dispatches a tool.
    fn tool_start(&mut self, name: &str, params: &HashMap<String, String>);

    /// Called when a tool returns its result.
    fn tool_result(&mut self, name: &str, output: &str);
}

/// Renders loop progress directly to stdout.
pub struct StdoutRenderer;

impl StdoutRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for StdoutRenderer {
    fn tool_start(&mut self, name: &str, params: &HashMap<String, String>) {
        let mut keys: Vec<&str> = params.keys().map(String::as_str).collect();
        keys.sort_unstable();
        println!(
            "{} {}({})",
            "action:".dimmed(),
            name.cyan(),
            keys.join(", ").dimmed()
        );
    }

    fn tool_result(&mut self, name: &str, output: &str) {
        // Keep progress lines to a single terminal row
        let preview: String = output.chars().take(60).collect();
        let ellipsis = if output.chars().count() > 60 { "…" } else { "" };
        println!(
            "{} {} → {}{}",
            "result:".dimmed(),
            name.cyan(),
            preview.dimmed(),
            ellipsis
        );
    }
}

/// Discards all progress output.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn tool_start(&mut self, _name: &str, _params: &HashMap<String, String>) {}
    fn tool_result(&mut self, _name: &str, _output: &str) {}
}
