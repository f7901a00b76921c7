//! Configuration management for the user registry
//!
//! Values come from built-in defaults, an optional `registry.toml` in the
//! working directory, and `USER_REGISTRY_*` environment variables, in
//! increasing order of precedence.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::auth::DEFAULT_CREDENTIAL_SUFFIX;

/// Name of the optional configuration file (extension resolved by `config`)
pub const CONFIG_FILE: &str = "registry";

/// Environment prefix, e.g. `USER_REGISTRY_CREDENTIAL_SUFFIX`
pub const ENV_PREFIX: &str = "USER_REGISTRY";

const DEFAULT_DEMO_USERNAME: &str = "alice";
const DEFAULT_DEMO_SECRET: &str = "password123";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Marker appended to secrets to form stored credentials
    pub credential_suffix: String,

    /// User registered by the driver
    pub demo_username: String,
    pub demo_secret: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            credential_suffix: DEFAULT_CREDENTIAL_SUFFIX.to_string(),
            demo_username: DEFAULT_DEMO_USERNAME.to_string(),
            demo_secret: DEFAULT_DEMO_SECRET.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from `registry.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from TOML text layered over the defaults.
    /// Environment variables are not consulted.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("credential_suffix", DEFAULT_CREDENTIAL_SUFFIX)?
            .set_default("demo_username", DEFAULT_DEMO_USERNAME)?
            .set_default("demo_secret", DEFAULT_DEMO_SECRET)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let config: RegistryConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.credential_suffix.is_empty() {
            return Err(ConfigError::Message(
                "credential_suffix cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_is_empty() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.credential_suffix, "_hashed");
        assert_eq!(config.demo_username, "alice");
        assert_eq!(config.demo_secret, "password123");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = RegistryConfig::from_toml_str(
            r#"
            credential_suffix = "_v2"
            demo_username = "bob"
            "#,
        )
        .unwrap();

        assert_eq!(config.credential_suffix, "_v2");
        assert_eq!(config.demo_username, "bob");
        assert_eq!(config.demo_secret, "password123");
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let err = RegistryConfig::from_toml_str(r#"credential_suffix = """#).unwrap_err();
        assert!(err.to_string().contains("credential_suffix cannot be empty"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(RegistryConfig::from_toml_str("credential_suffix = ").is_err());
    }
}
