//! Tool definitions and registry for plume.
//!
//! A tool is a named, described, callable unit the model may request by
//! emitting an action directive. Tools take keyword arguments as a string
//! map and return a string result. The registry preserves registration
//! order because its rendered catalog is embedded in the system prompt —
//! a different ordering would change the text the model sees.

pub mod blog_ideas;
pub mod summarize;

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::Generate;

use blog_ideas::BlogIdeasTool;
use summarize::SummarizeTool;

/// Every tool implements this trait.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the LLM uses to request this tool.
    fn name(&self) -> &str;

    /// Human-readable description rendered into the system prompt.
    fn description(&self) -> &str;

    /// Execute the tool with the given keyword arguments.
    async fn call(&self, params: &HashMap<String, String>) -> Result<String>;
}

/// Fetches a required keyword argument, failing with the parameter name.
pub(crate) fn require<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing required parameter: {key}"))
}

/// Holds all registered tools and resolves dispatch by name.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Called during startup.
    ///
    /// Re-registering a name replaces the existing entry and moves it to the
    /// end of the order, so the last registration wins and the catalog stays
    /// deterministic.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(Arc::from(tool));
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Renders the catalog embedded in the system prompt: one
    /// `"<name>:\n <description>"` entry per tool, in registration order.
    pub fn catalog(&self) -> String {
        self.tools
            .iter()
            .map(|t| format!("{}:\n {}", t.name(), t.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// How many tools are registered.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolRegistry {
    /// Create a registry with all built-in tools.
    ///
    /// Each tool receives its own handle to the generator rather than
    /// reaching for a shared global client, so tools stay independently
    /// testable.
    pub fn with_builtins(generator: Arc<dyn Generate>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SummarizeTool::new(Arc::clone(&generator))));
        registry.register(Box::new(BlogIdeasTool::new(generator)));
        registry
    }
}
