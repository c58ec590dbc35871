//! Provider identification.
//!
//! [`ProviderKind`] names the backend a completion runs against. It parses
//! from the strings used in CLI flags and config.toml (via [`FromStr`]) and
//! displays as those same strings, so the two stay interchangeable.

use std::fmt;
use std::str::FromStr;

/// Identifies which LLM backend serves completions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    /// Anthropic (Claude models). The default backend.
    #[default]
    Anthropic,
    /// OpenAI (GPT models).
    OpenAI,
    /// OpenRouter (multi-provider gateway).
    OpenRouter,
    /// Ollama (local models via OpenAI-compatible API).
    Ollama,
}

impl ProviderKind {
    /// The model used when neither a CLI flag nor config.toml names one.
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Anthropic => crate::constants::DEFAULT_MODEL,
            Self::OpenAI => crate::constants::DEFAULT_OPENAI_MODEL,
            Self::OpenRouter => crate::constants::DEFAULT_OPENROUTER_MODEL,
            Self::Ollama => crate::constants::OLLAMA_DEFAULT_MODEL,
        }
    }
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAI),
            "openrouter" => Ok(Self::OpenRouter),
            "ollama" => Ok(Self::Ollama),
            other => Err(anyhow::anyhow!(
                "unknown provider {other:?} (expected anthropic, openai, openrouter, or ollama)"
            )),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Anthropic => "anthropic",
            Self::OpenAI => "openai",
            Self::OpenRouter => "openrouter",
            Self::Ollama => "ollama",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Anthropic".parse::<ProviderKind>().unwrap(),
            ProviderKind::Anthropic
        );
        assert_eq!("OLLAMA".parse::<ProviderKind>().unwrap(), ProviderKind::Ollama);
        assert!("bedrock".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in [
            ProviderKind::Anthropic,
            ProviderKind::OpenAI,
            ProviderKind::OpenRouter,
            ProviderKind::Ollama,
        ] {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn each_kind_has_a_default_model() {
        assert_eq!(
            ProviderKind::default().default_model(),
            crate::constants::DEFAULT_MODEL
        );
        assert_eq!(
            ProviderKind::Ollama.default_model(),
            crate::constants::OLLAMA_DEFAULT_MODEL
        );
    }
}
