//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use rfpdesk_extractor::ExtractorConfig;
use rfpdesk_llm::azure::{DEFAULT_API_VERSION, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};
use rfpdesk_llm::AzureOpenAiConfig;
use rfpdesk_store::DEFAULT_STORAGE_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the Azure OpenAI API key.
pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";

/// CLI configuration.
///
/// The API key is not part of the file; it is read from
/// `AZURE_OPENAI_API_KEY` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the document list is persisted
    #[serde(default = "default_storage_file")]
    pub storage_file: PathBuf,

    /// Model service settings
    #[serde(default)]
    pub model: ModelConfig,

    /// Extraction limits
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Azure OpenAI deployment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Resource endpoint, e.g. `https://example.openai.azure.com`
    #[serde(default)]
    pub endpoint: String,

    /// Deployment name
    #[serde(default = "default_deployment")]
    pub deployment: String,

    /// API version query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per request for transient failures
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Config {
    /// Directory holding the config file and REPL history.
    pub fn home() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".rfpdesk"))
    }

    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Get the REPL history file path.
    pub fn history_path() -> Result<PathBuf> {
        Ok(Self::home()?.join("history.txt"))
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check values that would only fail later.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        if self.model.timeout_secs == 0 {
            return Err(CliError::Config("model.timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`, which maps variable names to values.
    ///
    /// `AZURE_OPENAI_DEPLOYMENT_NAME` wins over `AZURE_OPENAI_MODEL`. Blank
    /// values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = get("AZURE_OPENAI_ENDPOINT") {
            self.model.endpoint = endpoint;
        }
        if let Some(deployment) = get("AZURE_OPENAI_DEPLOYMENT_NAME").or_else(|| get("AZURE_OPENAI_MODEL")) {
            self.model.deployment = deployment;
        }
        if let Some(api_version) = get("AZURE_OPENAI_API_VERSION") {
            self.model.api_version = api_version;
        }
    }

    /// Build the model client settings, taking the key from the environment.
    pub fn model_settings(&self) -> Result<AzureOpenAiConfig> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| CliError::Config(format!("{} is not set", API_KEY_VAR)))?;
        self.model_settings_with_key(api_key)
    }

    /// Build the model client settings with an explicit key.
    pub fn model_settings_with_key(&self, api_key: impl Into<String>) -> Result<AzureOpenAiConfig> {
        if self.model.endpoint.trim().is_empty() {
            return Err(CliError::Config(
                "No model endpoint configured. Set AZURE_OPENAI_ENDPOINT or [model].endpoint".into(),
            ));
        }

        Ok(AzureOpenAiConfig::new(&self.model.endpoint, &self.model.deployment, api_key)
            .with_api_version(&self.model.api_version)
            .with_timeout_secs(self.model.timeout_secs)
            .with_max_attempts(self.model.max_attempts))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            model: ModelConfig::default(),
            extractor: ExtractorConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            deployment: default_deployment(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            history_size: default_history_size(),
        }
    }
}

fn default_storage_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_FILE)
}

fn default_deployment() -> String {
    "gpt-4".to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_true() -> bool {
    true
}

fn default_history_size() -> usize {
    1000
}
