use autonomes_client::types::chat::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use autonomes_client::ClientConfig;
use autonomes_dashboard::{ChatSettings, PageSettings, DEFAULT_GREETING, DEFAULT_MODEL};
use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ClientConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Model selected when the dashboard opens
    pub default_model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub greeting: String,
    pub show_greeting: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            greeting: DEFAULT_GREETING.to_string(),
            show_greeting: true,
        }
    }
}

impl From<ChatConfig> for PageSettings {
    fn from(config: ChatConfig) -> Self {
        Self {
            default_model: config.default_model,
            chat: ChatSettings {
                temperature: config.temperature,
                max_tokens: config.max_tokens,
                greeting: config.show_greeting.then_some(config.greeting),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. Built-in defaults
    /// 2. config/default.toml
    /// 3. config/{ENV}.toml (if ENV is set)
    /// 4. The file passed with `--config`
    /// 5. Environment variables (`AUTONOMES_API__BASE_URL`, `AUTONOMES_CHAT__DEFAULT_MODEL`, ...)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let mut builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("AUTONOMES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
