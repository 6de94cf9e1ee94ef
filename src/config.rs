use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::prompts::PromptDialect;

pub const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_GEMINI_API_KEY";

/// Main configuration structure for TravelBuddy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub prompts: PromptsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// True when a usable credential is present. Checked per request so the
    /// server can start without one and report a configuration error instead.
    pub fn is_api_key_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Template dialect, fixed for the lifetime of the process. Dialects are
    /// never mixed mid-session.
    #[serde(default)]
    pub dialect: PromptDialect,
}

impl Config {
    /// Load configuration from file with environment variable overrides.
    /// ALWAYS returns a valid config - never fails.
    pub fn load() -> Self {
        // Load environment variables from .env files
        let env_paths = [".env", "../.env"];

        let mut env_loaded = false;
        for path in &env_paths {
            if dotenvy::from_path(path).is_ok() {
                tracing::info!("Loaded .env from: {}", path);
                env_loaded = true;
                break;
            }
        }

        if !env_loaded {
            tracing::warn!("No .env file found - continuing with env vars only");
        }

        let config_path =
            env::var("TRAVELBUDDY_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

        // Load config from file if it exists
        let mut config = if Path::new(&config_path).exists() {
            match fs::read_to_string(&config_path) {
                Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {}", config_path);
                        config
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to parse config file {}: {} - using defaults",
                            config_path,
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to read config file {}: {} - using defaults",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            tracing::warn!("Config file not found at {} - using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();

        // Validate configuration - log warnings but don't fail
        if let Err(e) = config.validate() {
            tracing::warn!("Config validation warnings: {} - continuing anyway", e);
        }

        config
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("TRAVELBUDDY_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("TRAVELBUDDY_PORT") {
            if let Ok(port_num) = port.parse() {
                self.server.port = port_num;
            }
        }

        // The two deployment variants of the credential name are both accepted.
        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            self.gemini.api_key = api_key;
        } else if let Ok(api_key) = env::var("GOOGLE_GEMINI_API_KEY") {
            self.gemini.api_key = api_key;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            self.gemini.model = model;
        }

        if let Ok(dialect) = env::var("TRAVELBUDDY_PROMPT_DIALECT") {
            match dialect.parse() {
                Ok(parsed) => self.prompts.dialect = parsed,
                Err(()) => tracing::warn!(
                    "Unknown prompt dialect '{}'. Keeping '{}'.",
                    dialect,
                    self.prompts.dialect
                ),
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.server.port == 0 {
            return Err("Server port cannot be 0".into());
        }
        if self.gemini.model.is_empty() {
            return Err("Gemini model cannot be empty".into());
        }
        if !self.gemini.is_api_key_configured() {
            return Err("GEMINI_API_KEY environment variable must be set".into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "travelbuddy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY")
                    .or_else(|_| env::var("GOOGLE_GEMINI_API_KEY"))
                    .unwrap_or_else(|_| {
                        tracing::warn!("GEMINI_API_KEY not set, using placeholder");
                        PLACEHOLDER_API_KEY.to_string()
                    }),
                model: "gemini-2.0-flash-exp".to_string(),
            },
            prompts: PromptsConfig {
                dialect: PromptDialect::default(),
            },
        }
    }
}
