//! Process configuration read from environment variables.
//!
//! | Variable            | Default      | Meaning                                   |
//! |---------------------|--------------|-------------------------------------------|
//! | `HOST`              | `127.0.0.1`  | Interface to bind.                        |
//! | `PORT`              | `8080`       | TCP port.                                 |
//! | `JSON_LIMIT_BYTES`  | `10485760`   | Maximum accepted JSON body.               |
//! | `SUBMISSION_STORE`  | `memory`     | `memory` or `sqlite`.                     |
//! | `SQLITE_PATH`       | `:memory:`   | Database file when the store is `sqlite`. |
//! | `OPEN_BROWSER`      | `true`       | Open the UI in a browser on startup.      |

use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sqlite { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub json_limit: usize,
    pub store: StoreKind,
    pub open_browser: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", lookup("PORT"), 8080)?;
        let json_limit = parse_or("JSON_LIMIT_BYTES", lookup("JSON_LIMIT_BYTES"), 10 * 1024 * 1024)?;
        let open_browser = parse_or("OPEN_BROWSER", lookup("OPEN_BROWSER"), true)?;

        let store = match lookup("SUBMISSION_STORE").as_deref() {
            None | Some("memory") => StoreKind::Memory,
            Some("sqlite") => StoreKind::Sqlite {
                path: lookup("SQLITE_PATH").unwrap_or_else(|| ":memory:".to_string()),
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "SUBMISSION_STORE",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            json_limit,
            store,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.url(), "http://127.0.0.1:8080");
        assert_eq!(cfg.json_limit, 10 * 1024 * 1024);
        assert_eq!(cfg.store, StoreKind::Memory);
        assert!(cfg.open_browser);
    }

    #[test]
    fn sqlite_store_with_path() {
        let cfg = config(&[
            ("SUBMISSION_STORE", "sqlite"),
            ("SQLITE_PATH", "forms.sqlite"),
            ("PORT", "3000"),
            ("OPEN_BROWSER", "false"),
        ])
        .unwrap();
        assert_eq!(
            cfg.store,
            StoreKind::Sqlite {
                path: "forms.sqlite".into()
            }
        );
        assert_eq!(cfg.port, 3000);
        assert!(!cfg.open_browser);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config(&[("PORT", "eighty")]).unwrap_err().to_string(),
            "PORT has an invalid value 'eighty'"
        );
        assert!(config(&[("SUBMISSION_STORE", "redis")]).is_err());
    }
}
