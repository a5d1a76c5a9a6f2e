//! Configuration loading from disk and process environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "CONTACT_BOOK_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    Ok(config)
}

/// Assemble the runtime configuration.
///
/// Starts from an optional TOML file named by `CONTACT_BOOK_CONFIG`,
/// applies `PORT` and `DATABASE_URL` environment overrides, then runs
/// semantic validation.
pub fn load() -> Result<AppConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => load_file(Path::new(&path))?,
        Err(_) => AppConfig::default(),
    };

    if let Ok(port) = env::var("PORT") {
        match apply_port(&config.server.bind_address, &port) {
            Some(addr) => config.server.bind_address = addr,
            None => tracing::warn!(port = %port, "Ignoring unparseable PORT override"),
        }
    }
    if let Ok(url) = env::var("DATABASE_URL") {
        config.database.url = url;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace the port of a `host:port` bind address. Returns `None` when the
/// override is not a valid port number.
fn apply_port(bind_address: &str, port: &str) -> Option<String> {
    let port: u16 = port.parse().ok()?;
    let host = bind_address.rsplit_once(':').map(|(h, _)| h)?;
    Some(format!("{}:{}", host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_replaces_only_the_port() {
        assert_eq!(
            apply_port("0.0.0.0:3000", "8080"),
            Some("0.0.0.0:8080".to_string())
        );
        assert_eq!(
            apply_port("127.0.0.1:3000", "3001"),
            Some("127.0.0.1:3001".to_string())
        );
    }

    #[test]
    fn bad_port_override_is_rejected() {
        assert_eq!(apply_port("0.0.0.0:3000", "not-a-port"), None);
        assert_eq!(apply_port("0.0.0.0:3000", "99999"), None);
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [database]
            url = "sqlite://test.db"
            max_connections = 2
            "#,
        )
        .unwrap();
        assert_eq!(parsed.database.url, "sqlite://test.db");
        assert_eq!(parsed.database.max_connections, 2);
    }
}
