mod config;
mod persona;
mod provider;
mod responder;
mod types;

pub use config::{load_env_file, Config, ConfigError, DEFAULT_LISTEN_ADDR, DEFAULT_MODEL, ENV_FILE};
pub use persona::{PERSONA_INSTRUCTION, SYSTEM_PROMPT};
pub use provider::{CompletionError, CompletionProvider, OpenAIProvider};
pub use responder::Responder;
pub use types::{Conversation, Message, Role};

#[cfg(test)]
pub(crate) use provider::mock;
