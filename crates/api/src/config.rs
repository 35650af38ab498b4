//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use classroom_students::StudentId;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ME_STUDENT_ID: &str = "670610728";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// HTTP bind address (default: 0.0.0.0)
    pub host: IpAddr,
    /// HTTP port (default: 3000)
    pub port: u16,
    /// Student returned by `GET /me`
    pub me_student_id: StudentId,
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    /// - `CLASSROOM_HOST`: bind address (default: 0.0.0.0)
    /// - `CLASSROOM_PORT`: port (default: 3000)
    /// - `CLASSROOM_ME_STUDENT_ID`: student served by `/me` (default: 670610728)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("CLASSROOM_HOST") {
            Some(val) => parse_var("CLASSROOM_HOST", val, |v| v.parse::<IpAddr>().ok())?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("CLASSROOM_PORT") {
            Some(val) => parse_var("CLASSROOM_PORT", val, |v| v.parse::<u16>().ok())?,
            None => DEFAULT_PORT,
        };

        let me_student_id = parse_var(
            "CLASSROOM_ME_STUDENT_ID",
            lookup("CLASSROOM_ME_STUDENT_ID").unwrap_or_else(|| DEFAULT_ME_STUDENT_ID.to_string()),
            |v| StudentId::parse(v).ok(),
        )?;

        Ok(Self {
            host,
            port,
            me_student_id,
        })
    }

    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(
    var: &'static str,
    value: String,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    parse(&value).ok_or(ConfigError::Invalid { var, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.me_student_id.as_str(), "670610728");
        assert_eq!(config.http_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn overrides_are_read() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("CLASSROOM_HOST", "127.0.0.1"),
            ("CLASSROOM_PORT", "8080"),
            ("CLASSROOM_ME_STUDENT_ID", "650610002"),
        ]))
        .unwrap();
        assert_eq!(config.http_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.me_student_id.as_str(), "650610002");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[("CLASSROOM_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "CLASSROOM_PORT",
                value: "eighty".to_string()
            }
        );

        assert!(ApiConfig::from_lookup(lookup(&[("CLASSROOM_ME_STUDENT_ID", "123")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("CLASSROOM_HOST", "localhost:1")])).is_err());
    }
}
