//! The bounded think/act loop at the heart of plume.
//!
//! Each invocation owns its transcript: a system prompt built from the tool
//! registry's catalog, the user's query, then alternating assistant replies
//! and synthetic `Action_Response:` user messages carrying tool results.
//! The loop calls the injected generator at most `max_turns` times; a reply
//! with no parseable directive ends the loop and becomes the final answer.

mod directive;
mod error;

pub use directive::{extract_directives, ActionDirective};
pub use error::AgentError;

use crate::constants::{ACTION_PROMPT_TEMPLATE, ACTION_RESPONSE_PREFIX};
use crate::message::Message;
use crate::output::Renderer;
use crate::provider::Generate;
use crate::tools::ToolRegistry;

/// Builds the system prompt embedding the registry's rendered catalog.
pub fn system_prompt(tools: &ToolRegistry) -> String {
    ACTION_PROMPT_TEMPLATE.replace("{actions_list}", &tools.catalog())
}

/// Seeds a fresh transcript: one system message, then the user's query.
pub fn seed_transcript(tools: &ToolRegistry, user_query: &str) -> Vec<Message> {
    vec![
        Message::system(system_prompt(tools)),
        Message::user(user_query),
    ]
}

/// Runs the bounded action loop over a seeded transcript.
///
/// Each iteration generates one assistant reply and appends it. If the
/// reply embeds a directive, the named tool is dispatched and its result
/// appended as a user message prefixed with `Action_Response: `; otherwise
/// the loop ends and the reply is the final answer. The turn counter
/// starts at 1 and is incremented at the top of each iteration, so exactly
/// `max_turns` generation calls occur when every reply carries a
/// directive — and the directive produced on the final permitted turn is
/// still dispatched before the loop terminates.
///
/// Returns the content of the last transcript message.
///
/// # Errors
///
/// - [`AgentError::UnknownTool`] when a directive names an unregistered
///   tool. The transcript is left exactly as it was when the directive was
///   produced.
/// - [`AgentError::Tool`] when a tool handler fails.
/// - [`AgentError::Generation`] when the generator fails.
pub async fn agent_loop(
    generator: &dyn Generate,
    messages: &mut Vec<Message>,
    tools: &ToolRegistry,
    renderer: &mut dyn Renderer,
    max_turns: usize,
) -> Result<String, AgentError> {
    let mut turn = 1;

    while turn <= max_turns {
        turn += 1;

        let reply = generator
            .generate(messages)
            .await
            .map_err(AgentError::Generation)?;
        messages.push(Message::assistant(&reply));

        let Some(directives) = extract_directives(&reply) else {
            break;
        };
        // Only the first directive of a reply is dispatched
        let directive = &directives[0];

        let tool = tools
            .get(&directive.function_name)
            .ok_or_else(|| AgentError::UnknownTool {
                name: directive.function_name.clone(),
            })?;

        renderer.tool_start(tool.name(), &directive.function_params);
        let result = tool
            .call(&directive.function_params)
            .await
            .map_err(|source| AgentError::Tool {
                name: directive.function_name.clone(),
                source,
            })?;
        renderer.tool_result(tool.name(), &result);

        messages.push(Message::user(format!("{ACTION_RESPONSE_PREFIX}{result}")));
    }

    Ok(messages
        .last()
        .map(|m| m.text().to_string())
        .unwrap_or_default())
}

/// Convenience entry point: seeds a transcript for `user_query` and runs
/// the loop over it.
pub async fn run_query(
    generator: &dyn Generate,
    tools: &ToolRegistry,
    user_query: &str,
    renderer: &mut dyn Renderer,
    max_turns: usize,
) -> Result<String, AgentError> {
    let mut messages = seed_transcript(tools, user_query);
    agent_loop(generator, &mut messages, tools, renderer, max_turns).await
}

#[cfg(test)]
mod tests;
