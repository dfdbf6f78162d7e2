//! Configuration loading from the process environment.

use std::num::ParseIntError;

use thiserror::Error;

use crate::config::schema::AppConfig;

pub const ENV_PORT: &str = "PORT";
pub const ENV_ENVIRONMENT: &str = "NODE_ENV";
pub const ENV_VERSION: &str = "APP_VERSION";
pub const ENV_BUILD_NUMBER: &str = "BUILD_NUMBER";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl AppConfig {
    /// Build the snapshot from the real process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the snapshot from an arbitrary variable lookup.
    ///
    /// Unset and empty variables both resolve to the default value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = AppConfig::default();

        if let Some(environment) = get(ENV_ENVIRONMENT) {
            config.environment = environment;
        }
        if let Some(version) = get(ENV_VERSION) {
            config.version = version;
        }
        if let Some(build_number) = get(ENV_BUILD_NUMBER) {
            config.build_number = build_number;
        }
        if let Some(raw) = get(ENV_PORT) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn each_variable_overrides_only_its_field() {
        let defaults = AppConfig::default();

        let config = load(&[(ENV_ENVIRONMENT, "production")]).unwrap();
        assert_eq!(config.environment, "production");
        assert_eq!(config, AppConfig { environment: "production".into(), ..defaults.clone() });

        let config = load(&[(ENV_VERSION, "2.3.1")]).unwrap();
        assert_eq!(config, AppConfig { version: "2.3.1".into(), ..defaults.clone() });

        let config = load(&[(ENV_BUILD_NUMBER, "42")]).unwrap();
        assert_eq!(config, AppConfig { build_number: "42".into(), ..defaults.clone() });

        let config = load(&[(ENV_PORT, "8080")]).unwrap();
        assert_eq!(config, AppConfig { port: 8080, ..defaults });
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        let config = load(&[(ENV_VERSION, ""), (ENV_PORT, "")]).unwrap();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = load(&[(ENV_PORT, "http")]).unwrap_err();
        match err {
            ConfigError::InvalidPort { ref value, .. } => assert_eq!(value, "http"),
        }
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(load(&[(ENV_PORT, "70000")]).is_err());
    }
}
