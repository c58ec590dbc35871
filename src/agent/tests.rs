use super::*;
use crate::output::NullRenderer;
use crate::provider::Generate;
use crate::tools::{summarize::SummarizeTool, Tool, ToolRegistry};

use anyhow::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Replays a fixed script of replies; repeats the last entry once the
/// script is exhausted. Counts how many times it was called.
struct ScriptedGenerator {
    replies: Vec<String>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|s| s.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Generate for ScriptedGenerator {
    async fn generate(&self, _messages: &[crate::message::Message]) -> Result<String> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst);
        let idx = i.min(self.replies.len() - 1);
        Ok(self.replies[idx].clone())
    }
}

/// Always fails.
struct FailingGenerator;

#[async_trait::async_trait]
impl Generate for FailingGenerator {
    async fn generate(&self, _messages: &[crate::message::Message]) -> Result<String> {
        anyhow::bail!("connection refused")
    }
}

/// Echoes its `text` parameter back.
struct EchoTool;

#[async_trait::async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Echo the text parameter."
    }
    async fn call(&self, params: &HashMap<String, String>) -> Result<String> {
        Ok(params.get("text").cloned().unwrap_or_default())
    }
}

/// Always fails.
struct BoomTool;

#[async_trait::async_trait]
impl Tool for BoomTool {
    fn name(&self) -> &str {
        "boom"
    }
    fn description(&self) -> &str {
        "Always fails."
    }
    async fn call(&self, _params: &HashMap<String, String>) -> Result<String> {
        anyhow::bail!("handler exploded")
    }
}

fn echo_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(EchoTool));
    registry
}

const ECHO_DIRECTIVE: &str =
    r#"Action: [{"function_name": "echo", "function_params": {"text": "hi"}}] PAUSE"#;

#[tokio::test]
async fn plain_text_reply_is_the_final_answer() {
    let generator = ScriptedGenerator::new(&["The weather is nice today."]);
    let tools = echo_registry();
    let mut messages = seed_transcript(&tools, "how is the weather?");

    let answer = agent_loop(&generator, &mut messages, &tools, &mut NullRenderer, 5)
        .await
        .unwrap();

    assert_eq!(answer, "The weather is nice today.");
    assert_eq!(generator.calls(), 1);
    // system, user, assistant — exactly one assistant message appended
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, crate::message::Role::Assistant);
}

#[tokio::test]
async fn directive_dispatches_then_final_answer() {
    // The summarize tool gets its own scripted generator, independent of
    // the loop's.
    let tool_generator = Arc::new(ScriptedGenerator::new(&["a short summary"]));
    let mut tools = ToolRegistry::new();
    tools.register(Box::new(SummarizeTool::new(tool_generator.clone())));

    let generator = ScriptedGenerator::new(&[
        r#"[{"function_name":"summarize_content","function_params":{"content":"X"}}]"#,
        "Summary: done",
    ]);
    let mut messages = seed_transcript(&tools, "summarize X");
    let before = messages.len();

    let answer = agent_loop(&generator, &mut messages, &tools, &mut NullRenderer, 5)
        .await
        .unwrap();

    assert_eq!(answer, "Summary: done");
    assert_eq!(generator.calls(), 2);
    assert_eq!(tool_generator.calls(), 1);

    // assistant(directive) → user(Action_Response) → assistant(final)
    assert_eq!(messages.len(), before + 3);
    assert_eq!(messages[before].role, crate::message::Role::Assistant);
    assert_eq!(messages[before + 1].role, crate::message::Role::User);
    assert_eq!(
        messages[before + 1].text(),
        "Action_Response: a short summary"
    );
    assert_eq!(messages[before + 2].text(), "Summary: done");
}

#[tokio::test]
async fn unknown_tool_fails_and_leaves_transcript_intact() {
    let generator = ScriptedGenerator::new(&[
        r#"[{"function_name": "does_not_exist", "function_params": {}}]"#,
    ]);
    let tools = echo_registry();
    let mut messages = seed_transcript(&tools, "do something");

    let err = agent_loop(&generator, &mut messages, &tools, &mut NullRenderer, 5)
        .await
        .unwrap_err();

    match err {
        AgentError::UnknownTool { name } => assert_eq!(name, "does_not_exist"),
        other => panic!("expected UnknownTool, got {other:?}"),
    }
    // The directive-bearing assistant message is the last append; nothing after it.
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, crate::message::Role::Assistant);
}

#[tokio::test]
async fn max_turns_one_still_dispatches() {
    let generator = ScriptedGenerator::new(&[ECHO_DIRECTIVE]);
    let tools = echo_registry();
    let mut messages = seed_transcript(&tools, "echo something");

    let answer = agent_loop(&generator, &mut messages, &tools, &mut NullRenderer, 1)
        .await
        .unwrap();

    // One generation call, one dispatch, and the tool-result message is
    // the last transcript entry.
    assert_eq!(generator.calls(), 1);
    assert_eq!(answer, "Action_Response: hi");
    assert_eq!(messages.len(), 4);
}

#[tokio::test]
async fn generation_call_count_equals_max_turns() {
    let generator = ScriptedGenerator::new(&[ECHO_DIRECTIVE]);
    let tools = echo_registry();
    let mut messages = seed_transcript(&tools, "echo forever");

    let max_turns = crate::constants::DEFAULT_MAX_TURNS;
    assert_eq!(max_turns, 5);

    let answer = agent_loop(&generator, &mut messages, &tools, &mut NullRenderer, max_turns)
        .await
        .unwrap();

    assert_eq!(generator.calls(), max_turns);
    assert_eq!(answer, "Action_Response: hi");

    // Exactly one assistant message per generation step
    let assistant_count = messages
        .iter()
        .filter(|m| m.role == crate::message::Role::Assistant)
        .count();
    assert_eq!(assistant_count, max_turns);
    // seed (2) + one assistant and one tool result per turn
    assert_eq!(messages.len(), 2 + 2 * max_turns);
}

#[tokio::test]
async fn tool_failure_names_the_tool() {
    let generator = ScriptedGenerator::new(&[
        r#"[{"function_name": "boom", "function_params": {}}]"#,
    ]);
    let mut tools = ToolRegistry::new();
    tools.register(Box::new(BoomTool));
    let mut messages = seed_transcript(&tools, "go boom");

    let err = agent_loop(&generator, &mut messages, &tools, &mut NullRenderer, 5)
        .await
        .unwrap_err();

    match err {
        AgentError::Tool { name, source } => {
            assert_eq!(name, "boom");
            assert!(source.to_string().contains("handler exploded"));
        }
        other => panic!("expected Tool, got {other:?}"),
    }
}

#[tokio::test]
async fn generation_failure_propagates() {
    let tools = echo_registry();
    let mut messages = seed_transcript(&tools, "hello");

    let err = agent_loop(&FailingGenerator, &mut messages, &tools, &mut NullRenderer, 5)
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Generation(_)));
    // Nothing was appended for the failed generation step
    assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn run_query_seeds_system_then_user() {
    let generator = ScriptedGenerator::new(&["hi there"]);
    let tools = echo_registry();
    let messages = seed_transcript(&tools, "hello");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, crate::message::Role::System);
    assert!(messages[0].text().contains("echo:\n Echo the text parameter."));
    assert_eq!(messages[1].role, crate::message::Role::User);

    let answer = run_query(&generator, &tools, "hello", &mut NullRenderer, 5)
        .await
        .unwrap();
    assert_eq!(answer, "hi there");
}
