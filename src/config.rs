use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://codechallenge.arctouch.com/quiz/1";
pub const DEFAULT_TOTAL_SECONDS: u32 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

const ENV_ENDPOINT: &str = "QUIZ_ENDPOINT";
const ENV_DURATION: &str = "QUIZ_DURATION_SECS";
const ENV_TIMEOUT: &str = "QUIZ_REQUEST_TIMEOUT_SECS";
const ENV_LOG_FILE: &str = "QUIZ_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub total_seconds: u32,
    pub request_timeout: Duration,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            total_seconds: DEFAULT_TOTAL_SECONDS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Read overrides from the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::Empty { var: ENV_ENDPOINT });
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(raw) = lookup(ENV_DURATION) {
            config.total_seconds = parse_positive(ENV_DURATION, &raw)?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            config.request_timeout = Duration::from_secs(parse_positive(ENV_TIMEOUT, &raw)?);
        }

        if let Some(path) = lookup(ENV_LOG_FILE) {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty { var: ENV_LOG_FILE });
            }
            config.log_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse_positive<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        })?;
    if value == T::default() {
        return Err(ConfigError::Zero { var });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn config_error(pairs: &[(&str, &str)]) -> ConfigError {
        Config::from_lookup(lookup_from(pairs)).unwrap_err()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.total_seconds, 300);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("QUIZ_ENDPOINT", " http://localhost:8080/quiz "),
            ("QUIZ_DURATION_SECS", "90"),
            ("QUIZ_REQUEST_TIMEOUT_SECS", "3"),
            ("QUIZ_LOG_FILE", "/tmp/quiz.log"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/quiz");
        assert_eq!(config.total_seconds, 90);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_path, PathBuf::from("/tmp/quiz.log"));
    }

    #[test]
    fn test_invalid_duration() {
        let err = config_error(&[("QUIZ_DURATION_SECS", "five")]);
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "QUIZ_DURATION_SECS",
                value: "five".to_string()
            }
        );

        let err = config_error(&[("QUIZ_DURATION_SECS", "-1")]);
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_zero_values_rejected() {
        let err = config_error(&[("QUIZ_DURATION_SECS", "0")]);
        assert_eq!(
            err,
            ConfigError::Zero {
                var: "QUIZ_DURATION_SECS"
            }
        );

        let err = config_error(&[("QUIZ_REQUEST_TIMEOUT_SECS", "0")]);
        assert_eq!(
            err,
            ConfigError::Zero {
                var: "QUIZ_REQUEST_TIMEOUT_SECS"
            }
        );
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let err = config_error(&[("QUIZ_ENDPOINT", "  ")]);
        assert_eq!(
            err,
            ConfigError::Empty {
                var: "QUIZ_ENDPOINT"
            }
        );
    }
}
