use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

use super::{require, Tool};
use crate::message::Message;
use crate::provider::Generate;

/// Generates blog post ideas for a topic in a given style.
pub struct BlogIdeasTool {
    /// Generator injected at construction; independent of the agent's loop.
    generator: Arc<dyn Generate>,
}

impl BlogIdeasTool {
    pub fn new(generator: Arc<dyn Generate>) -> Self {
        Self { generator }
    }
}

#[async_trait::async_trait]
impl Tool for BlogIdeasTool {
    fn name(&self) -> &str {
        "generate_blog_ideas"
    }

    fn description(&self) -> &str {
        "Generate blog ideas for a specific topic in a certain style."
    }

    async fn call(&self, params: &HashMap<String, String>) -> Result<String> {
        let topic = require(params, "topic")?;
        let style = require(params, "style")?;
        let prompt = format!("Generate 5 blog ideas about {topic} in a {style} style.");
        self.generator.generate(&[Message::user(prompt)]).await
    }
}
