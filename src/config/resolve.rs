//! Environment substitution and lookup helpers over the loaded config.

use super::types::Config;

impl Config {
    /// Expands `{env:VAR}` placeholders in every string field that carries
    /// them.
    pub(super) fn resolve_substitutions(&mut self) {
        self.model = expand_env(&self.model);
        if let Some(dp) = self.default_provider.as_mut() {
            *dp = expand_env(dp);
        }
        let entries = [
            &mut self.provider.openai,
            &mut self.provider.anthropic,
            &mut self.provider.ollama,
            &mut self.provider.openrouter,
        ];
        for entry in entries {
            let Some(e) = entry else { continue };
            if let Some(key) = e.api_key.as_mut() {
                *key = expand_env(key);
            }
            if let Some(url) = e.base_url.as_mut() {
                *url = expand_env(url);
            }
        }
    }

    /// API key for a provider: its env var wins, then the config entry.
    pub fn resolve_api_key(&self, provider: &str) -> Option<String> {
        let env_key = format!("{}_API_KEY", provider.to_uppercase());
        match std::env::var(&env_key) {
            Ok(val) if !val.is_empty() => Some(val),
            _ => self
                .provider
                .entry(provider)
                .and_then(|e| e.api_key.clone()),
        }
    }

    /// The configured default provider name, if any.
    pub fn provider_name(&self) -> Option<&str> {
        self.default_provider.as_deref()
    }

    /// The configured model, or `None` when the config still carries the
    /// built-in default (meaning the user never set one). A `provider/`
    /// prefix is stripped so shorthand written into config.toml keeps
    /// working.
    pub fn model_name(&self) -> Option<String> {
        if self.model == crate::constants::DEFAULT_MODEL {
            return None;
        }
        let name = match self.model.split_once('/') {
            Some((_, model)) => model,
            None => &self.model,
        };
        Some(name.to_string())
    }

    /// Maximum think/act turns per query, falling back to the built-in default.
    pub fn max_turns(&self) -> usize {
        self.max_turns.unwrap_or(crate::constants::DEFAULT_MAX_TURNS)
    }
}

/// Expands every `{env:VAR}` occurrence to the variable's value (empty when
/// the variable is unset). An unterminated placeholder is left as-is.
fn expand_env(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("{env:") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &rest[start + 5..start + len];
        out.push_str(&std::env::var(var).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_env_empty_for_unset_var() {
        assert_eq!(expand_env("{env:PLUME_TEST_UNSET_VAR}"), "");
    }

    #[test]
    fn expand_env_splices_surrounding_text() {
        std::env::set_var("PLUME_TEST_SPLICE", "abc");
        assert_eq!(expand_env("x-{env:PLUME_TEST_SPLICE}-y"), "x-abc-y");
    }

    #[test]
    fn expand_env_leaves_unterminated_placeholder() {
        assert_eq!(expand_env("{env:OOPS"), "{env:OOPS");
    }

    #[test]
    fn model_name_strips_provider_prefix() {
        let config = Config {
            model: "ollama/mistral".to_string(),
            ..Config::default()
        };
        assert_eq!(config.model_name().as_deref(), Some("mistral"));
    }

    #[test]
    fn model_name_none_for_builtin_default() {
        assert_eq!(Config::default().model_name(), None);
    }

    #[test]
    fn default_max_turns_is_five() {
        assert_eq!(crate::constants::DEFAULT_MAX_TURNS, 5);
        assert_eq!(Config::default().max_turns(), 5);
        let config = Config {
            max_turns: Some(2),
            ..Config::default()
        };
        assert_eq!(config.max_turns(), 2);
    }
}
