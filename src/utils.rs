use crate::chat_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the fmt subscriber. `RUST_LOG` wins over `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Report where configuration came from. Call once tracing is installed.
pub fn log_config(config: &Config) {
    match &config.env_file {
        Some(path) => tracing::debug!("loaded environment from {}", path.display()),
        None => tracing::debug!("no {} file found", crate::chat_core::ENV_FILE),
    }
}
