//! Static model catalog for plume.
//!
//! Known model identifiers per cloud provider, consumed by the `models`
//! subcommand. Ollama is deliberately absent from the table: its models
//! are discovered dynamically from the local server.

use crate::provider::ProviderKind;

/// Known models per provider, in display order.
pub const CATALOG: &[(ProviderKind, &[&str])] = &[
    (
        ProviderKind::Anthropic,
        &[
            "claude-opus-4-6",
            "claude-sonnet-4-6",
            "claude-haiku-4-5",
            "claude-sonnet-4-5",
            "claude-opus-4",
        ],
    ),
    (
        ProviderKind::OpenAI,
        &[
            "gpt-5.2",
            "gpt-5-mini",
            "gpt-5-nano",
            "gpt-4.1",
            "gpt-4.1-mini",
            "gpt-4.1-nano",
            "o3",
            "o4-mini",
        ],
    ),
];
