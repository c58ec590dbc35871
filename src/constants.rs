//! Centralized constants for plume.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "plume";

/// Default LLM model identifier.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";

/// Maximum tokens for LLM completions.
pub const MAX_TOKENS: u64 = 4096;

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "plume.toml";

/// Readline history filename.
pub const HISTORY_FILENAME: &str = "chat_history.txt";

/// Default LLM model identifier for OpenAI.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1";

/// Default LLM model identifier for OpenRouter.
pub const DEFAULT_OPENROUTER_MODEL: &str = "arcee-ai/trinity-large-preview:free";

/// Default base URL for local Ollama server.
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default LLM model identifier for Ollama.
pub const OLLAMA_DEFAULT_MODEL: &str = "llama3";

// --- Action loop ---

/// Default maximum number of think/act turns per query.
pub const DEFAULT_MAX_TURNS: usize = 5;

/// Prefix for tool results fed back into the transcript as user messages.
pub const ACTION_RESPONSE_PREFIX: &str = "Action_Response: ";

/// System prompt template for the action loop.
///
/// `{actions_list}` is replaced with the tool registry's rendered catalog.
/// The wording teaches the model the Thought / Action / PAUSE /
/// Action_Response protocol the loop parses.
pub const ACTION_PROMPT_TEMPLATE: &str = "\
You run in a loop of Thought, Action, PAUSE, Action_Response.
At the end of the loop, output an Answer.

Use Thought to understand the question you have been asked.
Use Action to run one of the actions available to you - then return PAUSE.
Action_Response will be the result of running those actions.

To request an action, output a JSON array with a single object of the form
[{\"function_name\": \"<name>\", \"function_params\": {\"<param>\": \"<value>\"}}]

Available actions:
{actions_list}
";
