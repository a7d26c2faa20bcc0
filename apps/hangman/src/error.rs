use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

/// Top-level error for everything that is not a game rule violation:
/// configuration, word list loading, and domain errors bubbling through
/// the console driver.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Word list error: {detail}")]
    WordList {
        detail: String,
        #[source]
        source: Option<std::io::Error>,
    },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn word_list(detail: impl Into<String>) -> Self {
        Self::WordList {
            detail: detail.into(),
            source: None,
        }
    }

    pub fn word_list_io(detail: impl Into<String>, source: std::io::Error) -> Self {
        Self::WordList {
            detail: detail.into(),
            source: Some(source),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::WordList { .. } => ErrorCode::WordListError,
            AppError::Domain(err) => err.code(),
        }
    }
}
