//! Configuration management for selector-fixer
//!
//! Stores settings in ~/.config/selector-fixer/config.json

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default Ollama endpoint (local loopback on the standard port)
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "llama3.2";

fn default_ollama_url() -> String {
    DEFAULT_OLLAMA_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_max_tokens() -> u32 {
    2000
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the Ollama API
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,
    /// Model identifier passed to /api/generate
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature (kept low so mappings stay deterministic-ish)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate (num_predict)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_url: default_ollama_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Config {
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("selector-fixer"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load config from disk, or return defaults.
    ///
    /// The OLLAMA_URL environment variable overrides the stored endpoint.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        if let Ok(url) = std::env::var("OLLAMA_URL") {
            if !url.trim().is_empty() {
                config.ollama_url = url.trim().to_string();
            }
        }
        config
    }

    fn load_file() -> Self {
        if let Some(path) = Self::config_path() {
            if let Ok(content) = fs::read_to_string(&path) {
                match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(err) => {
                        eprintln!(
                            "  Warning: Config file was corrupted ({}). Defaults were loaded.",
                            err
                        );
                    }
                }
            }
        }
        Self::default()
    }
}
