//! Model listing and discovery.
//!
//! Prints the static catalog grouped by provider, then whatever models the
//! local Ollama server reports.

use anyhow::Result;

use super::resolve::ModelSelection;
use crate::config::Config;

/// List all available models, grouped by provider.
pub async fn list_models(config: &Config) -> Result<()> {
    let current = ModelSelection::resolve(None, None, config)?.model;

    println!("Available models:\n");

    for (provider, names) in crate::models::CATALOG {
        println!("  {provider}:");
        for name in *names {
            let marker = if *name == current { " (default)" } else { "" };
            println!("    {name}{marker}");
        }
        println!();
    }

    println!("  ollama:");
    match list_ollama_models(config).await {
        Ok(models) if models.is_empty() => {
            println!("    (no models found -- run `ollama pull llama3`)");
        }
        Ok(models) => {
            for model in &models {
                let marker = if *model == current { " (default)" } else { "" };
                println!("    {model}{marker}");
            }
        }
        Err(_) => {
            println!("    (ollama not running)");
        }
    }

    Ok(())
}

/// Query Ollama's local API for available models.
async fn list_ollama_models(config: &Config) -> Result<Vec<String>> {
    let base_url = config
        .provider
        .entry("ollama")
        .and_then(|e| e.base_url.as_deref())
        .unwrap_or(crate::constants::OLLAMA_DEFAULT_BASE_URL);

    let tags: serde_json::Value = reqwest::get(format!("{base_url}/api/tags"))
        .await?
        .json()
        .await?;

    let names = tags["models"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|m| m["name"].as_str().map(String::from))
        .collect();

    Ok(names)
}
