// Configuration loading: defaults, TOML file, then environment

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Full service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub sources: SourcesConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7860,
        }
    }
}

/// Chat-completion endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Left unset in files; normally supplied through `GROQ_API_KEY`
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.6,
            max_tokens: 2048,
            timeout_secs: 120,
        }
    }
}

/// Upstream verse and commentary APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub quran_base_url: String,
    pub quran_edition: String,
    pub tafsir_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            quran_base_url: "http://api.alquran.cloud/v1/ayah".to_string(),
            quran_edition: "en.asad".to_string(),
            tafsir_base_url: "https://cdn.jsdelivr.net/gh/spa5k/tafsir_api@main/tafsir"
                .to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the optional TOML file, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay environment variables read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("GROQ_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Some(url) = non_empty("GROQ_BASE_URL") {
            self.llm.base_url = url;
        }
        if let Some(model) = non_empty("GROQ_MODEL") {
            self.llm.model = model;
        }
        if let Some(host) = non_empty("HOST") {
            self.server.host = host;
        }
        if let Some(port) = non_empty("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT".to_string(),
                message: format!("'{port}' is not a valid port number"),
            })?;
        }
        if let Some(url) = non_empty("QURAN_API_BASE_URL") {
            self.sources.quran_base_url = url;
        }
        if let Some(url) = non_empty("TAFSIR_API_BASE_URL") {
            self.sources.tafsir_base_url = url;
        }

        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::Invalid {
            key: key.to_string(),
            message: message.to_string(),
        };

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(invalid("llm.temperature", "must be between 0.0 and 2.0"));
        }
        if self.llm.max_tokens == 0 {
            return Err(invalid("llm.max_tokens", "must be greater than zero"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(invalid("llm.timeout_secs", "must be greater than zero"));
        }
        if self.sources.request_timeout_secs == 0 {
            return Err(invalid(
                "sources.request_timeout_secs",
                "must be greater than zero",
            ));
        }

        for (key, value) in [
            ("llm.base_url", &self.llm.base_url),
            ("llm.model", &self.llm.model),
            ("sources.quran_base_url", &self.sources.quran_base_url),
            ("sources.quran_edition", &self.sources.quran_edition),
            ("sources.tafsir_base_url", &self.sources.tafsir_base_url),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(key, "cannot be empty"));
            }
        }

        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
