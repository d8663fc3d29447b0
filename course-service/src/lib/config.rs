use std::env;
use std::fmt;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Minimum signing secret length for HS256.
const MIN_JWT_SECRET_BYTES: usize = 32;

/// Upper bound on token lifetime (one year).
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 366;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot run safely with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                MIN_JWT_SECRET_BYTES
            )));
        }

        if self.jwt.expiration_hours <= 0 || self.jwt.expiration_hours > MAX_JWT_EXPIRATION_HOURS {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}",
                MAX_JWT_EXPIRATION_HOURS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str, expiration_hours: i64) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/courses".to_string(),
                max_connections: 5,
            },
            server: ServerConfig { http_port: 3000 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_hours,
            },
        }
    }

    #[test]
    fn test_validate_accepts_long_secret() {
        let config = config_with_secret("a-very-long-secret-key-of-at-least-32-bytes", 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        let config = config_with_secret("short", 24);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_expiration() {
        let config = config_with_secret("a-very-long-secret-key-of-at-least-32-bytes", 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unbounded_expiration() {
        let secret = "a-very-long-secret-key-of-at-least-32-bytes";

        assert!(config_with_secret(secret, MAX_JWT_EXPIRATION_HOURS).validate().is_ok());
        assert!(config_with_secret(secret, MAX_JWT_EXPIRATION_HOURS + 1)
            .validate()
            .is_err());
        assert!(config_with_secret(secret, i64::MAX).validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = config_with_secret("a-very-long-secret-key-of-at-least-32-bytes", 24);
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("a-very-long-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
