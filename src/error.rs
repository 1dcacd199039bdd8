//! Error types shared by the fetch path and configuration.

use thiserror::Error;

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Decode,
}

/// Errors emitted while loading a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("quiz endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("malformed quiz payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("quiz payload is missing `{0}`")]
    MissingField(&'static str),
    #[error("quiz payload has no answers")]
    NoAnswers,
    #[error("quiz loader is not running")]
    WorkerUnavailable,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) | FetchError::HttpStatus(_) | FetchError::WorkerUnavailable => {
                FetchErrorKind::Network
            }
            FetchError::Decode(_) | FetchError::MissingField(_) | FetchError::NoAnswers => {
                FetchErrorKind::Decode
            }
        }
    }
}

/// Errors emitted while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} must be a whole number, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}
