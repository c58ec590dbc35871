//! Provider and model selection.
//!
//! Each query runs against one provider/model pair. [`ModelSelection`]
//! chooses that pair with CLI flags taking precedence over config.toml and
//! built-in defaults filling whatever is left.

use anyhow::Result;

use super::kind::ProviderKind;
use crate::config::Config;

/// The provider/model pair a query will run against.
pub struct ModelSelection {
    pub provider: ProviderKind,
    pub model: String,
}

impl ModelSelection {
    /// Chooses the provider and model for this invocation.
    ///
    /// Precedence per half: CLI flag, then config.toml, then the built-in
    /// default. With no explicit `--provider`, a `--model` of the form
    /// `provider/model` selects both halves at once; with `--provider`
    /// present the slash stays part of the model name (OpenRouter ids
    /// contain one).
    pub fn resolve(
        cli_provider: Option<&str>,
        cli_model: Option<&str>,
        config: &Config,
    ) -> Result<Self> {
        if cli_provider.is_none() {
            if let Some((prov, model)) = cli_model.and_then(|m| m.split_once('/')) {
                return Ok(Self {
                    provider: prov.parse()?,
                    model: model.to_string(),
                });
            }
        }

        let provider = cli_provider
            .or(config.provider_name())
            .map(|name| name.parse::<ProviderKind>())
            .transpose()?
            .unwrap_or_default();

        let model = cli_model
            .map(String::from)
            .or_else(|| config.model_name())
            .unwrap_or_else(|| provider.default_model().to_string());

        Ok(Self { provider, model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_configured() {
        let selection = ModelSelection::resolve(None, None, &Config::default()).unwrap();
        assert_eq!(selection.provider, ProviderKind::Anthropic);
        assert_eq!(selection.model, crate::constants::DEFAULT_MODEL);
    }

    #[test]
    fn shorthand_picks_provider_and_model() {
        let selection =
            ModelSelection::resolve(None, Some("ollama/mistral"), &Config::default()).unwrap();
        assert_eq!(selection.provider, ProviderKind::Ollama);
        assert_eq!(selection.model, "mistral");
    }

    #[test]
    fn explicit_provider_keeps_slash_in_model() {
        let selection =
            ModelSelection::resolve(Some("openrouter"), Some("org/some-model"), &Config::default())
                .unwrap();
        assert_eq!(selection.provider, ProviderKind::OpenRouter);
        assert_eq!(selection.model, "org/some-model");
    }

    #[test]
    fn cli_provider_beats_config() {
        let config = Config {
            default_provider: Some("openai".to_string()),
            ..Config::default()
        };
        let selection = ModelSelection::resolve(Some("ollama"), None, &config).unwrap();
        assert_eq!(selection.provider, ProviderKind::Ollama);
        assert_eq!(selection.model, crate::constants::OLLAMA_DEFAULT_MODEL);
    }

    #[test]
    fn unknown_provider_is_an_error() {
        assert!(ModelSelection::resolve(Some("bedrock"), None, &Config::default()).is_err());
    }
}
