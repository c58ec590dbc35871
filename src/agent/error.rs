//! Typed failures for the action loop.
//!
//! These surface as values to the loop's caller so a failure inside the
//! loop never unwinds through the terminal front-end. A reply that simply
//! contains no parseable directive is not an error — the loop treats it as
//! the final answer.

use thiserror::Error;

/// Failures the action loop can surface to its caller.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The model requested a tool that is not in the registry.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    /// A tool handler failed while executing.
    #[error("tool {name} failed")]
    Tool {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The injected generation function failed.
    #[error("generation failed")]
    Generation(#[source] anyhow::Error),
}
