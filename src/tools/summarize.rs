use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

use super::{require, Tool};
use crate::message::Message;
use crate::provider::Generate;

/// Summarizes user-provided content by delegating to the model.
pub struct SummarizeTool {
    /// Generator injected at construction; independent of the agent's loop.
    generator: Arc<dyn Generate>,
}

impl SummarizeTool {
    pub fn new(generator: Arc<dyn Generate>) -> Self {
        Self { generator }
    }
}

#[async_trait::async_trait]
impl Tool for SummarizeTool {
    fn name(&self) -> &str {
        "summarize_content"
    }

    fn description(&self) -> &str {
        "Summarize the provided content."
    }

    async fn call(&self, params: &HashMap<String, String>) -> Result<String> {
        let content = require(params, "content")?;
        let prompt = format!("Summarize this content: {content}");
        self.generator.generate(&[Message::user(prompt)]).await
    }
}
