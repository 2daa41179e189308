//! Settings resolution from CLI flags, a dotenv file, and the environment.

mod settings;

pub use settings::{
    DEFAULT_CHUNK_SIZE, DEFAULT_ENDPOINT, DEFAULT_ENV_FILE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
    ENV_PREFIX, EnvVars, FALLBACK_API_KEY_ENV, ResolveOptions, Settings, load_env_file,
    resolve_settings,
};
