//! LLM provider client implementation.
//!
//! Contains the [`Provider`] struct which wraps rig-core provider clients
//! behind enum dispatch, keeping provider-specific details out of the CLI
//! layer. Supports Anthropic, OpenAI, OpenRouter, and Ollama.
//!
//! Completions are non-streaming: the action loop works one whole reply at
//! a time, parsing each finished reply for an action directive before
//! deciding whether to call the model again. rig-core's own multi-turn tool
//! driving is deliberately unused — plume owns its dispatch loop.

use anyhow::{Context, Result};
use rig::client::CompletionClient;
use rig::completion::Chat;
use rig::message::Message as RigMessage;
use rig::providers::{anthropic, openai, openrouter};

use super::kind::ProviderKind;
use super::resolve::ModelSelection;
use super::Generate;
use crate::config::Config;
use crate::message::{Message, Role};

/// Internal enum wrapping provider-specific clients.
enum ClientKind {
    Anthropic(anthropic::Client),
    OpenAI(openai::Client),
    OpenRouter(openrouter::Client),
    Ollama(openai::Client),
}

/// A configured LLM provider ready to handle completion requests.
///
/// Wraps a rig-core provider client and the target model name. Supports
/// Anthropic, OpenAI, OpenRouter, and Ollama via internal enum dispatch.
/// Agents are constructed on each call since they are cheap to create and
/// may use different system prompts.
pub struct Provider {
    client: ClientKind,
    model: String,
}

/// Helper macro to reduce duplication across provider match arms.
///
/// Builds an agent from the given client, model, and optional system prompt,
/// then executes the provided block with the agent bound to `$agent`.
macro_rules! with_agent {
    ($client:expr, $model:expr, $sys:expr, |$agent:ident| $body:expr) => {{
        let $agent = if let Some(sys) = $sys {
            $client
                .agent($model)
                .preamble(sys)
                .max_tokens(crate::constants::MAX_TOKENS)
                .build()
        } else {
            $client
                .agent($model)
                .max_tokens(crate::constants::MAX_TOKENS)
                .build()
        };
        $body
    }};
}

/// Dispatches an operation across provider-specific clients.
///
/// Matches on [`ClientKind`] and executes the same block for each variant,
/// letting the compiler monomorphize per provider.
macro_rules! dispatch {
    ($self:expr, |$client:ident| $body:expr) => {
        match &$self.client {
            ClientKind::Anthropic($client) => $body,
            ClientKind::OpenAI($client) => $body,
            ClientKind::OpenRouter($client) => $body,
            ClientKind::Ollama($client) => $body,
        }
    };
}

impl Provider {
    /// Creates a new [`Provider`] from the loaded application config.
    ///
    /// Resolves the API key through plume's config precedence chain
    /// (env var → config file → substitution) and builds the appropriate
    /// provider client. Defaults to Anthropic when no provider is specified.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is found for the selected provider
    /// or if client construction fails.
    pub fn from_config(config: &Config, selection: &ModelSelection) -> Result<Self> {
        match selection.provider {
            ProviderKind::Anthropic => {
                let api_key = config
                    .resolve_api_key("anthropic")
                    .context("No API key found for Anthropic. Set ANTHROPIC_API_KEY or configure it in config.toml")?;
                let client = anthropic::Client::new(&api_key)
                    .context("Failed to create Anthropic client")?;
                Ok(Self {
                    client: ClientKind::Anthropic(client),
                    model: selection.model.clone(),
                })
            }
            ProviderKind::OpenAI => {
                let api_key = config
                    .resolve_api_key("openai")
                    .context("No API key found for OpenAI. Set OPENAI_API_KEY or configure it in config.toml")?;
                let client =
                    openai::Client::new(&api_key).context("Failed to create OpenAI client")?;
                Ok(Self {
                    client: ClientKind::OpenAI(client),
                    model: selection.model.clone(),
                })
            }
            ProviderKind::OpenRouter => {
                let api_key = config
                    .resolve_api_key("openrouter")
                    .context("No API key found for OpenRouter. Set OPENROUTER_API_KEY or configure it in config.toml")?;
                let client = openrouter::Client::new(&api_key)
                    .context("Failed to create OpenRouter client")?;
                Ok(Self {
                    client: ClientKind::OpenRouter(client),
                    model: selection.model.clone(),
                })
            }
            ProviderKind::Ollama => {
                let base_url = config
                    .provider
                    .entry("ollama")
                    .and_then(|o| o.base_url.as_deref())
                    .unwrap_or(crate::constants::OLLAMA_DEFAULT_BASE_URL);
                let client = openai::Client::builder()
                    .api_key("ollama")
                    .base_url(format!("{}/v1", base_url))
                    .build()
                    .context("Failed to create Ollama client")?;
                Ok(Self {
                    client: ClientKind::Ollama(client),
                    model: selection.model.clone(),
                })
            }
        }
    }

    /// Sends a full conversation transcript and returns the model's reply.
    ///
    /// Converts plume's [`Message`] types to rig-core messages: the first
    /// system message becomes the agent preamble, the last message becomes
    /// the prompt, and everything in between is chat history.
    async fn chat(&self, transcript: &[Message]) -> Result<String> {
        let system_prompt = transcript
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.text());

        let prompt_text = transcript
            .last()
            .map(|m| m.text().to_string())
            .unwrap_or_default();

        let chat_history: Vec<RigMessage> = transcript
            .iter()
            .take(transcript.len().saturating_sub(1))
            .filter(|m| m.role != Role::System)
            .map(|m| match m.role {
                Role::Assistant => RigMessage::assistant(m.text()),
                _ => RigMessage::user(m.text()),
            })
            .collect();

        dispatch!(self, |client| {
            let response = with_agent!(client, &self.model, system_prompt, |agent| {
                agent.chat(prompt_text.clone(), chat_history.clone()).await
            });
            Ok(response?)
        })
    }
}

#[async_trait::async_trait]
impl Generate for Provider {
    async fn generate(&self, messages: &[Message]) -> Result<String> {
        self.chat(messages).await
    }
}
