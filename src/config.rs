use crate::{MockError, Result};
use identity_mock_harness::MockEnv;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".identity-mock.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub env: EnvConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Default returns installed on every reset, as JSON text keyed by
    /// operation name
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvConfig {
    /// Principal used as `tx-sender`
    #[serde(default)]
    pub sender: Option<String>,
    /// Starting block height
    #[serde(default)]
    pub block_height: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            MockError::FileError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            MockError::ConfigError(format!(
                "Failed to parse TOML config from {:?}: {}",
                config_path, e
            ))
        })?;

        Ok(config)
    }

    /// Load default config if file is missing, otherwise warn and fall back on failure
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }

    pub fn mock_env(&self) -> MockEnv {
        let mut env = MockEnv::default();
        if let Some(sender) = &self.env.sender {
            env.tx_sender = sender.clone();
        }
        if let Some(height) = self.env.block_height {
            env.block_height = height;
        }
        env
    }

    /// Parses the configured default returns. Entries that are not valid
    /// JSON are skipped with a warning.
    pub fn default_returns(&self) -> BTreeMap<String, Value> {
        self.defaults
            .iter()
            .filter_map(|(operation, raw)| match serde_json::from_str::<Value>(raw) {
                Ok(value) => Some((operation.clone(), value)),
                Err(e) => {
                    warn!(
                        operation = operation.as_str(),
                        "Default return is not valid JSON: {}. Skipping.", e
                    );
                    None
                }
            })
            .collect()
    }
}
