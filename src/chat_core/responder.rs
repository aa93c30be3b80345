use std::sync::Arc;

use tracing::instrument;

use super::config::Config;
use super::persona::PERSONA_INSTRUCTION;
use super::provider::{CompletionError, CompletionProvider, OpenAIProvider};
use super::types::{Conversation, Message};

/// Sends a conversation to the completion provider and appends the reply.
pub struct Responder {
    model: String,
    provider: Arc<dyn CompletionProvider>,
}

impl Responder {
    pub fn new(model: impl Into<String>, provider: Arc<dyn CompletionProvider>) -> Responder {
        Responder {
            model: model.into(),
            provider,
        }
    }

    pub fn from_config(config: &Config) -> Responder {
        Responder::new(config.model.clone(), Arc::new(OpenAIProvider::new(config)))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns `history` with the persona at its head (if it had no system
    /// message there) and the assistant's trimmed reply appended.
    #[instrument(skip_all, fields(model = %self.model, turns = history.len()))]
    pub async fn respond(&self, history: Conversation) -> Result<Conversation, CompletionError> {
        let mut messages = with_persona(history);
        let reply = self.provider.complete(&self.model, &messages).await?;
        let reply = reply.trim();
        tracing::info!(reply_len = reply.len(), "assistant replied");

        messages.push(Message::assistant(reply));
        Ok(messages)
    }
}

fn with_persona(history: Conversation) -> Conversation {
    match history.first() {
        Some(first) if first.is_system() => history,
        _ => {
            // persona, history, and the reply `respond` pushes afterwards
            let mut messages = Vec::with_capacity(history.len() + 2);
            messages.push(PERSONA_INSTRUCTION.clone());
            messages.extend(history);
            messages
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_core::mock::ScriptedProvider;
    use crate::chat_core::Role;

    fn responder(provider: &Arc<ScriptedProvider>) -> Responder {
        Responder::new("test-model", provider.clone())
    }

    #[tokio::test]
    async fn test_empty_history_gets_persona() {
        let provider = Arc::new(ScriptedProvider::replying(["Hello, bork!"]));
        let result = responder(&provider).respond(Vec::new()).await.unwrap();

        assert_eq!(
            result,
            vec![PERSONA_INSTRUCTION.clone(), Message::assistant("Hello, bork!")]
        );
        let submitted = provider.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].0, "test-model");
        assert_eq!(submitted[0].1, vec![PERSONA_INSTRUCTION.clone()]);
    }

    #[tokio::test]
    async fn test_user_first_history_is_prefixed_and_reply_trimmed() {
        let provider = Arc::new(ScriptedProvider::replying(["  Try an omelette!  "]));
        let history = vec![Message::user("What can I make with eggs?")];
        let result = responder(&provider).respond(history.clone()).await.unwrap();

        let expected_submitted = vec![PERSONA_INSTRUCTION.clone(), history[0].clone()];
        assert_eq!(provider.submitted()[0].1, expected_submitted);
        assert_eq!(result.len(), 3);
        assert_eq!(result[..2], expected_submitted[..]);
        assert_eq!(result[2], Message::assistant("Try an omelette!"));
    }

    #[tokio::test]
    async fn test_system_first_history_is_submitted_verbatim() {
        let provider = Arc::new(ScriptedProvider::replying(["ok"]));
        let history = vec![
            Message::system("custom persona"),
            Message::user("hi"),
            Message::assistant("hello"),
            Message::user("hi"),
        ];
        let result = responder(&provider).respond(history.clone()).await.unwrap();

        assert_eq!(provider.submitted()[0].1, history);
        assert_eq!(result[..history.len()], history[..]);
        assert_eq!(result.last(), Some(&Message::assistant("ok")));
    }

    #[tokio::test]
    async fn test_assistant_first_history_is_prefixed() {
        let provider = Arc::new(ScriptedProvider::replying(["ok"]));
        let history = vec![Message::assistant("earlier reply")];
        let result = responder(&provider).respond(history).await.unwrap();

        assert_eq!(result[0], *PERSONA_INSTRUCTION);
        assert_eq!(result[1], Message::assistant("earlier reply"));
        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_persona_inserted_once_across_turns() {
        let provider = Arc::new(ScriptedProvider::replying(["first", "second"]));
        let responder = responder(&provider);

        let mut history = responder.respond(vec![Message::user("eggs?")]).await.unwrap();
        history.push(Message::user("and bacon?"));
        let history = responder.respond(history).await.unwrap();

        let system_count = history.iter().filter(|m| m.role == Role::System).count();
        assert_eq!(system_count, 1);
        assert_eq!(history.len(), 5);
        assert_eq!(history[4], Message::assistant("second"));
        assert_eq!(provider.submitted()[1].1, history[..4]);
    }

    #[tokio::test]
    async fn test_whitespace_only_reply_becomes_empty() {
        let provider = Arc::new(ScriptedProvider::replying([" \n\t "]));
        let result = responder(&provider).respond(Vec::new()).await.unwrap();
        assert_eq!(result.last(), Some(&Message::assistant("")));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = Arc::new(ScriptedProvider::failing(CompletionError::MissingContent));
        let err = responder(&provider)
            .respond(vec![Message::user("eggs?")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::MissingContent));
        assert_eq!(provider.submitted().len(), 1);
    }
}
