use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    ListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("failed to load {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

/// Settings read once at startup and handed to whoever needs them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub model: String,
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub listen_addr: SocketAddr,
    /// The `.env` file that was loaded, if any.
    pub env_file: Option<PathBuf>,
}

/// Copy `path`'s variables into the process environment. Variables that are
/// already set keep their value.
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load `.env` (existing variables win) and read the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        let path = Path::new(ENV_FILE);
        let env_file = if path.is_file() {
            load_env_file(path)?;
            Some(path.to_path_buf())
        } else {
            None
        };

        let config = Config::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Config { env_file, ..config })
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model = get("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let listen = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::ListenAddr {
                value: listen.clone(),
                source,
            })?;

        Ok(Config {
            model,
            api_key: get("OPENAI_API_KEY"),
            api_base: get("OPENAI_API_BASE"),
            listen_addr,
            env_file: None,
        })
    }
}
