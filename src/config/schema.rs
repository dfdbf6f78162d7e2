//! Configuration schema definitions.

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_BUILD_NUMBER: &str = "unknown";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Snapshot of the application settings captured at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment name (`NODE_ENV`).
    pub environment: String,

    /// Application version string (`APP_VERSION`).
    pub version: String,

    /// CI build identifier (`BUILD_NUMBER`).
    pub build_number: String,

    /// TCP port to listen on (`PORT`).
    pub port: u16,

    /// Interface to bind. Not read from the environment.
    pub bind_host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            version: DEFAULT_VERSION.to_string(),
            build_number: DEFAULT_BUILD_NUMBER.to_string(),
            port: DEFAULT_PORT,
            bind_host: DEFAULT_BIND_HOST.to_string(),
        }
    }
}

impl AppConfig {
    /// Socket address string the listener binds to, e.g. `0.0.0.0:3000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.build_number, "unknown");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
