use std::env;

use thiserror::Error;

use crate::notify::DEFAULT_CAPACITY;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8888";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer (got {value:?})")]
    InvalidNumber { name: &'static str, value: String },
}

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `TODO_BIND_ADDR`
    pub bind_addr: String,
    /// `TODO_LOG`, an `EnvFilter` directive.
    pub log_filter: String,
    /// `TODO_NOTIFY_CAPACITY`, messages buffered per observer.
    pub notify_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notify_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let notify_capacity = match lookup("TODO_NOTIFY_CAPACITY") {
            Some(value) => parse_positive("TODO_NOTIFY_CAPACITY", value)?,
            None => defaults.notify_capacity,
        };

        Ok(Config {
            bind_addr: lookup("TODO_BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_filter: lookup("TODO_LOG").unwrap_or(defaults.log_filter),
            notify_capacity,
        })
    }
}

fn parse_positive(name: &'static str, value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { name, value }),
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr, "127.0.0.1:8888");
        assert_eq!(config.notify_capacity, 64);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TODO_BIND_ADDR", "0.0.0.0:3000"),
            ("TODO_LOG", "todo_events=debug"),
            ("TODO_NOTIFY_CAPACITY", "16"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.log_filter, "todo_events=debug");
        assert_eq!(config.notify_capacity, 16);
    }

    #[test]
    fn rejects_bad_capacity() {
        for bad in ["0", "-1", "many"] {
            let err = Config::from_lookup(lookup(&[("TODO_NOTIFY_CAPACITY", bad)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidNumber {
                    name: "TODO_NOTIFY_CAPACITY",
                    value: bad.to_string(),
                }
            );
        }
    }
}
