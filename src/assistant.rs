//! Client side of the range assistant chat service.
//!
//! The service streams replies as server-sent events; each `data:` line holds
//! one JSON [`StreamEvent`]. Ranges are sent along as a read-only
//! [`RangeContext`].

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest message the service accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Snapshot of the range under discussion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeContext {
    pub name: String,
    pub hands: Vec<String>,
    pub total_combinations: u32,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_context: Option<RangeContext>,
}

impl ChatRequest {
    /// Build a request, rejecting empty or oversized messages.
    pub fn new(
        message: &str,
        conversation_id: Option<String>,
        range_context: Option<RangeContext>,
    ) -> Result<Self, AssistantError> {
        let message = message.trim();
        let len = message.chars().count();
        if len == 0 || len > MAX_MESSAGE_CHARS {
            return Err(AssistantError::Message(len));
        }
        Ok(Self { message: message.to_string(), conversation_id, range_context })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    ConversationId { conversation_id: String },
    Content { content: String },
    Done {
        #[serde(default)]
        timestamp: Option<String>,
    },
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Health {
    pub status: String,
    pub ai_enabled: bool,
    pub ai_provider: Option<String>,
    pub version: String,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AssistantError {
    #[error("message must be 1..={MAX_MESSAGE_CHARS} characters, got {0}")]
    Message(usize),
    #[error("assistant request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("assistant returned status {0}")]
    Status(u16),
    #[error("reading assistant stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("assistant reported: {0}")]
    Remote(String),
}

/// Parse one line of an SSE body. Only non-empty `data:` lines carrying a
/// valid event produce a value.
///
/// ```
/// use poker_ranges::assistant::{parse_sse_line, StreamEvent};
///
/// let ev = parse_sse_line(r#"data: {"type":"content","content":"hi"}"#);
/// assert_eq!(ev, Some(StreamEvent::Content { content: "hi".into() }));
/// assert_eq!(parse_sse_line(": keep-alive"), None);
/// ```
pub fn parse_sse_line(line: &str) -> Option<StreamEvent> {
    let data = line.strip_prefix("data:")?.trim();
    if data.is_empty() {
        return None;
    }
    match serde_json::from_str(data) {
        Ok(ev) => Some(ev),
        Err(err) => {
            warn!(%err, "skipping malformed stream event");
            None
        }
    }
}

/// Remote chat service.
pub trait Assistant: Send + Sync {
    /// Send a message and feed every streamed event to `on_event` in order.
    fn chat_stream(
        &self,
        request: &ChatRequest,
        on_event: &mut dyn FnMut(StreamEvent),
    ) -> Result<(), AssistantError>;

    fn health(&self) -> Result<Health, AssistantError>;

    fn clear_conversation(&self, conversation_id: &str) -> Result<(), AssistantError>;
}

/// HTTP client for the assistant service.
#[derive(Debug, Clone)]
pub struct HttpAssistant {
    base_url: String,
    client: Client,
}

impl HttpAssistant {
    pub fn new(base_url: &str) -> Result<Self, AssistantError> {
        let client =
            Client::builder().connect_timeout(Duration::from_secs(5)).timeout(None).build()?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Assistant for HttpAssistant {
    fn chat_stream(
        &self,
        request: &ChatRequest,
        on_event: &mut dyn FnMut(StreamEvent),
    ) -> Result<(), AssistantError> {
        debug!(url = %self.base_url, chars = request.message.len(), "chat request");
        let response = self.client.post(self.url("/chat/stream")).json(request).send()?;
        if !response.status().is_success() {
            return Err(AssistantError::Status(response.status().as_u16()));
        }
        let reader = BufReader::new(response);
        for line in reader.lines() {
            if let Some(ev) = parse_sse_line(&line?) {
                let done = matches!(ev, StreamEvent::Done { .. } | StreamEvent::Error { .. });
                on_event(ev);
                if done {
                    break;
                }
            }
        }
        Ok(())
    }

    fn health(&self) -> Result<Health, AssistantError> {
        let response = self.client.get(self.url("/health")).timeout(Duration::from_secs(5)).send()?;
        if !response.status().is_success() {
            return Err(AssistantError::Status(response.status().as_u16()));
        }
        Ok(response.json()?)
    }

    fn clear_conversation(&self, conversation_id: &str) -> Result<(), AssistantError> {
        let response = self.client.delete(self.url(&format!("/chat/{conversation_id}"))).send()?;
        if !response.status().is_success() {
            return Err(AssistantError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Local transcript of one conversation.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    id: Option<String>,
    messages: Vec<ChatMessage>,
    pending: bool,
    error: Option<String>,
}

impl Conversation {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// A reply is still streaming.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record the user's message and open an empty assistant reply.
    pub fn begin(&mut self, message: &str) {
        self.messages.push(ChatMessage { role: Role::User, content: message.to_string() });
        self.messages.push(ChatMessage { role: Role::Assistant, content: String::new() });
        self.pending = true;
        self.error = None;
    }

    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::ConversationId { conversation_id } => self.id = Some(conversation_id),
            StreamEvent::Content { content } => {
                if let Some(last) = self.messages.last_mut().filter(|m| m.role == Role::Assistant) {
                    last.content.push_str(&content);
                }
            }
            StreamEvent::Done { .. } => self.pending = false,
            StreamEvent::Error { error } => self.fail(error),
        }
    }

    /// Add an assistant message that no request produced.
    pub fn say(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage { role: Role::Assistant, content: content.into() });
    }

    /// Mark the pending reply as failed.
    pub fn fail(&mut self, error: String) {
        self.pending = false;
        self.error = Some(error);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
