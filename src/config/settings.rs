use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::paths::{default_output_path, is_pdf_path};
use crate::translation::{DEFAULT_TARGET_LANGUAGE, validate_language};

/// Prefix of every environment variable read by the resolver.
pub const ENV_PREFIX: &str = "PDFT_";

/// Credential variable consulted when `PDFT_API_KEY` is unset.
pub const FALLBACK_API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_CHUNK_SIZE: usize = 2000;
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Fully resolved settings for one run.
///
/// Built once by [`resolve_settings`] and passed by reference to every stage.
#[derive(Debug, Clone)]
pub struct Settings {
    /// API key for the chat endpoint. Never empty after resolution.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Maximum characters per chunk (at least 1).
    pub chunk_size: usize,
    /// The PDF to translate.
    pub input_path: PathBuf,
    /// Explicit output path, if one was given.
    pub output_path: Option<PathBuf>,
    /// Target language code (ISO 639-1).
    pub target_language: String,
    /// OpenAI-compatible endpoint base URL.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Settings {
    /// Where the translation is written: the explicit path or
    /// `translated_<stem>.txt` next to the input.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_path))
    }
}

/// Values supplied on the command line.
///
/// `None` means "not given", letting the environment or defaults apply.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub api_key: Option<String>,
    pub pdf_path: Option<String>,
    pub chunk_size: Option<usize>,
    pub model: Option<String>,
    pub output: Option<PathBuf>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// A snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// Captures the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Looks up a variable by its full name. Empty values count as unset.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Looks up `PDFT_<KEY>` for an option key such as `chunk_size`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_raw(&env_name(key))
    }
}

fn env_name(key: &str) -> String {
    format!("{ENV_PREFIX}{}", key.to_uppercase())
}

/// Loads a dotenv file into the process environment if it exists.
///
/// Variables that are already set keep their values. Returns `true` if a file
/// was loaded.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    if !path.is_file() {
        return Ok(false);
    }

    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}

/// Resolves settings from CLI options and environment variables.
///
/// Priority: CLI options > environment variables > built-in defaults.
pub fn resolve_settings(
    options: &ResolveOptions,
    env: &EnvVars,
) -> Result<Settings, ConfigError> {
    let api_key = non_blank(options.api_key.as_deref())
        .or_else(|| env.get("api_key"))
        .or_else(|| env.get_raw(FALLBACK_API_KEY_ENV))
        .map(str::trim)
        .ok_or(ConfigError::MissingCredential)?
        .to_string();

    let pdf_path = non_blank(options.pdf_path.as_deref())
        .or_else(|| env.get("pdf_path"))
        .ok_or(ConfigError::MissingInput)?;

    if !is_pdf_path(pdf_path) {
        return Err(ConfigError::InvalidInputFormat {
            path: pdf_path.to_string(),
        });
    }

    let chunk_size = match options.chunk_size {
        Some(size) => check_positive("--chunk-size", size as u64, &size.to_string())? as usize,
        None => env
            .get("chunk_size")
            .map(|value| parse_positive("chunk_size", value))
            .transpose()?
            .map_or(DEFAULT_CHUNK_SIZE, |size| size as usize),
    };

    let timeout_secs = match options.timeout_secs {
        Some(secs) => check_positive("--timeout", secs, &secs.to_string())?,
        None => env
            .get("timeout")
            .map(|value| parse_positive("timeout", value))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    let model = non_blank(options.model.as_deref())
        .or_else(|| env.get("model"))
        .unwrap_or(DEFAULT_MODEL)
        .to_string();

    let target_language = non_blank(options.to.as_deref())
        .or_else(|| env.get("to"))
        .unwrap_or(DEFAULT_TARGET_LANGUAGE)
        .to_string();
    validate_language(&target_language)?;

    let endpoint = non_blank(options.endpoint.as_deref())
        .or_else(|| env.get("endpoint"))
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string();

    let output_path = options
        .output
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| env.get("output").map(PathBuf::from));

    Ok(Settings {
        api_key,
        model,
        chunk_size,
        input_path: PathBuf::from(pdf_path),
        output_path,
        target_language,
        endpoint,
        timeout: Duration::from_secs(timeout_secs),
    })
}

/// Blank CLI values count as not given.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_positive(key: &str, value: &str) -> Result<u64, ConfigError> {
    let parsed = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            key: env_name(key),
            value: value.to_string(),
            reason: "expected a positive integer".to_string(),
        })?;
    check_positive(&env_name(key), parsed, value)
}

fn check_positive(key: &str, parsed: u64, raw: &str) -> Result<u64, ConfigError> {
    if parsed == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(parsed)
}
