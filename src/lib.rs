pub mod chat_core;
pub mod server;
pub mod utils;

pub use chat_core::{CompletionError, Config, Conversation, Message, Responder, Role};
pub use server::start_server;
