//! Error kinds for every stage of a translation run.
//!
//! Each variant is terminal for the run and maps to exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by stage errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised while resolving [`Settings`](crate::config::Settings).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is required")]
    MissingCredential,

    #[error("PDF path is required")]
    MissingInput,

    #[error("target file must be a PDF file: {path}")]
    InvalidInputFormat { path: String },

    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid language code: '{code}'")]
    UnsupportedLanguage { code: String },

    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Top-level error of a translation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read PDF {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("no text could be extracted from {path}")]
    EmptyDocument { path: PathBuf },

    #[error("translation client is not configured: API key is missing")]
    NotConfigured,

    #[error("failed to initialize HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("translation of chunk {index}/{total} failed: {source}")]
    Translation {
        index: usize,
        total: usize,
        #[source]
        source: BoxError,
    },

    #[error("failed to write translation to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err: Error = ConfigError::MissingCredential.into();
        assert_eq!(err.to_string(), "API key is required");
    }

    #[test]
    fn test_translation_error_names_chunk() {
        let err = Error::Translation {
            index: 2,
            total: 3,
            source: "connection reset".into(),
        };
        let message = err.to_string();
        assert!(message.contains("2/3"));
        assert!(message.contains("connection reset"));
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = [
            Error::NotConfigured,
            Error::EmptyDocument {
                path: PathBuf::from("a.pdf"),
            },
            ConfigError::MissingInput.into(),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1);
        }
    }
}
