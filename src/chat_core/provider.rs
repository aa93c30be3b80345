use async_openai::{
    config::OpenAIConfig, error::OpenAIError, types as openai_types, Client,
};
use async_trait::async_trait;
use thiserror::Error;

use super::config::Config;
use super::types::{Message, Role};

type RequestMessage = openai_types::ChatCompletionRequestMessage;
type RequestArgs = openai_types::CreateChatCompletionRequestArgs;
type MessageArgs = openai_types::ChatCompletionRequestMessageArgs;

/// Anything that went wrong between submitting a conversation and getting text back.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Api(#[from] OpenAIError),
    #[error("completion response contained no choices")]
    NoChoices,
    #[error("first completion choice carried no message content")]
    MissingContent,
}

/// A chat completion backend: takes the full message list, returns the reply text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, CompletionError>;
}

pub struct OpenAIProvider {
    client: Client<OpenAIConfig>,
}

impl OpenAIProvider {
    pub fn new(config: &Config) -> OpenAIProvider {
        let mut openai_config = OpenAIConfig::new();
        if let Some(key) = &config.api_key {
            openai_config = openai_config.with_api_key(key);
        }
        if let Some(base) = &config.api_base {
            openai_config = openai_config.with_api_base(base);
        }
        OpenAIProvider {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, CompletionError> {
        let request = RequestArgs::default()
            .model(model)
            .messages(to_request_messages(messages)?)
            .build()?;

        let response = self.client.chat().create(request).await?;
        tracing::debug!(choices = response.choices.len(), "completion received");

        first_content(response.choices.into_iter().map(|choice| choice.message.content))
    }
}

fn to_openai_role(role: Role) -> openai_types::Role {
    match role {
        Role::System => openai_types::Role::System,
        Role::User => openai_types::Role::User,
        Role::Assistant => openai_types::Role::Assistant,
    }
}

fn to_request_messages(messages: &[Message]) -> Result<Vec<RequestMessage>, CompletionError> {
    messages
        .iter()
        .map(|message| {
            MessageArgs::default()
                .role(to_openai_role(message.role))
                .content(message.content.as_str())
                .build()
                .map_err(CompletionError::from)
        })
        .collect()
}

/// Content of the first choice, exactly as the provider sent it.
fn first_content<I>(contents: I) -> Result<String, CompletionError>
where
    I: IntoIterator<Item = Option<String>>,
{
    contents
        .into_iter()
        .next()
        .ok_or(CompletionError::NoChoices)?
        .ok_or(CompletionError::MissingContent)
}
