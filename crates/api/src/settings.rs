//! Environment-driven runtime settings.

use std::net::SocketAddr;

use solestock_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "SOLESTOCK_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "SOLESTOCK_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Problems found while reading the environment. Logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::Json,
            warnings: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key/value source. Malformed values fall back to
    /// the default and leave a warning behind.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            match raw.trim().parse() {
                Ok(addr) => settings.bind_addr = addr,
                Err(_) => settings.warnings.push(format!(
                    "{BIND_ADDR_VAR}={raw:?} is not a socket address; using {DEFAULT_BIND_ADDR}"
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => settings.log_format = format,
                None => settings.warnings.push(format!(
                    "{LOG_FORMAT_VAR}={raw:?} is not one of json, pretty; using json"
                )),
            }
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_bind_addr_and_log_format() {
        let settings = Settings::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (LOG_FORMAT_VAR, "pretty"),
        ]));
        assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(settings.log_format, LogFormat::Pretty);
        assert!(settings.warnings.is_empty());
    }

    #[test]
    fn malformed_values_fall_back_with_warnings() {
        let settings = Settings::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "localhost"),
            (LOG_FORMAT_VAR, "xml"),
        ]));
        assert_eq!(settings.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.warnings.len(), 2);
    }
}
