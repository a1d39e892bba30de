use serde::Deserialize;
use std::path::Path;

use super::key::{SecretKey, SignatureAlgorithm};
use crate::error::ConfigError;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Environment variable holding the signing key
    #[serde(default = "default_key_env")]
    pub key_env: String,

    /// HMAC digest used for new and verified signatures
    #[serde(default)]
    pub algorithm: SignatureAlgorithm,

    /// Signature lifetime when the caller does not pass one
    #[serde(default = "default_expiry_secs")]
    pub default_expiry_secs: u64,

    /// Longest lifetime the HTTP API will issue (unbounded if unset)
    #[serde(default)]
    pub max_expiry_secs: Option<u64>,
}

fn default_key_env() -> String {
    "HMAC_SIGNATURE_KEY".to_string()
}

fn default_expiry_secs() -> u64 {
    300 // 5 minutes
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        path = %path.display(),
                        algorithm = %config.algorithm,
                        default_expiry_secs = config.default_expiry_secs,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Read the signing key from the environment variable named by `key_env`
    pub fn secret_key(&self) -> Result<SecretKey, ConfigError> {
        self.secret_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the signing key through an arbitrary variable lookup
    pub fn secret_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<SecretKey, ConfigError> {
        match lookup(&self.key_env) {
            Some(value) if !value.is_empty() => Ok(SecretKey::new(value)),
            _ => Err(ConfigError::MissingKey(self.key_env.clone())),
        }
    }

    /// Whether a requested lifetime is within `max_expiry_secs`
    pub fn allows_expiry(&self, expiry_secs: u64) -> bool {
        self.max_expiry_secs.map_or(true, |max| expiry_secs <= max)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            key_env: default_key_env(),
            algorithm: SignatureAlgorithm::default(),
            default_expiry_secs: default_expiry_secs(),
            max_expiry_secs: None,
        }
    }
}
