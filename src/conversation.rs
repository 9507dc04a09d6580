//! Conversation state and turn processing
//!
//! The caller owns the [`Conversation`] and passes it into every turn.

use crate::config::CompletionConfig;
use crate::error::AppError;
use crate::models::openai::{ChatCompletionRequest, ChatMessage};
use crate::providers::ChatCompletion;
use tracing::{debug, warn};

/// Ordered message history; the first message is the translation instruction
///
/// The instruction is a `system` message, not an `assistant` one, since
/// chat-completion APIs only read system messages as instructions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversation with the given instruction
    pub fn with_instruction(prompt: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.set_instruction(prompt);
        conversation
    }

    /// Replace the instruction, keeping the rest of the history
    pub fn set_instruction(&mut self, prompt: impl Into<String>) {
        match self.messages.first_mut() {
            Some(first) => first.content = prompt.into(),
            None => self.messages.push(ChatMessage::system(prompt)),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop everything after the instruction
    pub fn clear_history(&mut self) {
        self.messages.truncate(1);
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// Build the completion request for the current history
pub fn build_request(
    conversation: &Conversation,
    model: &str,
    params: &CompletionConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: conversation.messages().to_vec(),
        max_tokens: Some(params.max_tokens),
        temperature: Some(params.temperature),
        top_p: Some(params.top_p),
        presence_penalty: Some(params.presence_penalty),
        frequency_penalty: Some(params.frequency_penalty),
    }
}

/// Run one translation turn
///
/// The user message is appended before the request is sent and stays in the
/// history if the request fails. The reply is appended only on success.
pub async fn process_turn(
    conversation: &mut Conversation,
    completion: &dyn ChatCompletion,
    model: &str,
    params: &CompletionConfig,
    user_text: &str,
) -> Result<String, AppError> {
    conversation.push(ChatMessage::user(user_text));
    let request = build_request(conversation, model, params);

    debug!(model = model, messages = conversation.len(), "Sending translation turn");

    match completion.complete(request).await {
        Ok(reply) => {
            conversation.push(ChatMessage::assistant(reply.clone()));
            Ok(reply)
        }
        Err(e) => {
            warn!(model = model, error = %e, kind = e.kind(), "Translation turn failed");
            Err(e)
        }
    }
}
