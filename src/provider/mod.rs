//! LLM provider abstraction for plume.
//!
//! Wraps rig-core's provider clients behind a [`Provider`] struct with enum
//! dispatch, keeping provider-specific details out of the CLI layer. Supports
//! Anthropic, OpenAI, OpenRouter, and Ollama (local) via [`ProviderKind`].
//!
//! The [`Generate`] trait is the seam between the action loop and the model:
//! the loop and every tool receive a generator by injection, so they can be
//! driven by a scripted fake in tests and never reach for a shared global
//! client.

mod client;
mod kind;
mod listing;
mod resolve;

pub use client::Provider;
pub use kind::ProviderKind;
pub use listing::list_models;
pub use resolve::ModelSelection;

use anyhow::Result;

use crate::message::Message;

/// A text-generation function over a conversation transcript.
///
/// Implementations must not mutate the input and must be synchronous from
/// the caller's perspective: one call, one completed reply.
#[async_trait::async_trait]
pub trait Generate: Send + Sync {
    /// Generate the next assistant reply for the given transcript.
    async fn generate(&self, messages: &[Message]) -> Result<String>;
}
