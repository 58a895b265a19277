use std::sync::Arc;

use thiserror::Error;

use crate::config::seed_conversation;
use crate::llm::{ ChatClient, GenerationError };
use crate::markup;
use crate::models::Turn;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Missing, non-string, or blank input. Detected before any external
    /// call; surfaced as a 400 with a fixed message.
    #[error("Invalid request body. userInput cannot be empty.")]
    InvalidRequest,

    /// Any failure from the external generation capability. Surfaced as a
    /// 500 with a generic message; the cause is logged, never exposed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Stateless request handler: the only state it carries is the immutable
/// seed conversation, shared identically across every request.
pub struct ChatRelay {
    chat_client: Arc<dyn ChatClient>,
    seed: Vec<Turn>,
}

impl ChatRelay {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            seed: seed_conversation(),
        }
    }

    /// Validate the utterance, append it to the seed conversation, run one
    /// generation call, and post-process the reply into an HTML fragment.
    pub async fn handle_chat(&self, input: &str) -> Result<String, RelayError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RelayError::InvalidRequest);
        }

        let mut turns = self.seed.clone();
        turns.push(Turn::user(input));

        let reply = self.chat_client.generate(&turns).await?;
        let normalized = markup::normalize_whitespace(&reply);
        Ok(markup::render_html(&normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every conversation it is asked to complete and returns a
    /// canned reply.
    struct RecordingClient {
        calls: Mutex<Vec<Vec<Turn>>>,
        reply: Result<String, ()>,
    }

    impl RecordingClient {
        fn replying(reply: &str) -> Self {
            Self { calls: Mutex::new(Vec::new()), reply: Ok(reply.to_string()) }
        }

        fn failing() -> Self {
            Self { calls: Mutex::new(Vec::new()), reply: Err(()) }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatClient for RecordingClient {
        async fn generate(&self, turns: &[Turn]) -> Result<String, GenerationError> {
            self.calls.lock().unwrap().push(turns.to_vec());
            self.reply
                .clone()
                .map_err(|_| GenerationError::Network("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn appends_input_as_final_turn_after_seed() {
        let client = Arc::new(RecordingClient::replying("Hi there!"));
        let relay = ChatRelay::new(client.clone());

        relay.handle_chat("hello").await.unwrap();

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let turns = &calls[0];
        assert_eq!(&turns[..turns.len() - 1], &seed_conversation()[..]);
        assert_eq!(turns.last().unwrap(), &Turn::user("hello"));
    }

    #[tokio::test]
    async fn renders_reply_as_html_fragment() {
        let client = Arc::new(RecordingClient::replying("Hi there!"));
        let relay = ChatRelay::new(client);

        let html = relay.handle_chat("hello").await.unwrap();
        assert_eq!(html, "<p>Hi there!</p>\n");
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_generation() {
        let client = Arc::new(RecordingClient::replying("unused"));
        let relay = ChatRelay::new(client.clone());

        for input in ["", "   ", "\n\t "] {
            let err = relay.handle_chat(input).await.unwrap_err();
            assert!(matches!(err, RelayError::InvalidRequest));
        }
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn generation_failures_propagate() {
        let client = Arc::new(RecordingClient::failing());
        let relay = ChatRelay::new(client);

        let err = relay.handle_chat("hello").await.unwrap_err();
        assert!(matches!(err, RelayError::Generation(_)));
    }

    #[tokio::test]
    async fn multiline_reply_collapses_to_break_markers() {
        let client = Arc::new(RecordingClient::replying("line1\n\n\nline2"));
        let relay = ChatRelay::new(client);

        let html = relay.handle_chat("hello").await.unwrap();
        assert_eq!(html, "<p>line1<br/>line2</p>\n");
    }
}
