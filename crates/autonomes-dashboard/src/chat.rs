use std::sync::{Arc, Mutex};

use autonomes_client::types::chat::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use autonomes_client::{ApiError, ChatReply, ChatRequest, DashboardApi};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::selected::SelectedModel;

pub const DEFAULT_GREETING: &str =
    "🤖 Hello! I'm AutonomesAI v2.1, powered by LangGraph + Ollama. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ChatMessage {
    fn plain(id: String, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
            model: None,
            token_count: None,
            processing_time_ms: None,
            trace_id: None,
        }
    }

    fn from_reply(id: String, reply: ChatReply) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: reply.response,
            timestamp: Utc::now(),
            model: reply.model_used,
            token_count: reply.tokens_used,
            processing_time_ms: reply.processing_time_ms,
            trace_id: reply.trace_id,
        }
    }

    fn from_error(id: String, error: &ApiError) -> Self {
        Self::plain(id, Role::Assistant, format!("❌ Error: {}", error))
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Result of a [`ChatSession::send_message`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input, or a request was already in flight. Nothing changed.
    Ignored,
    /// The assistant reply was appended
    Answered,
    /// An error message was appended in place of a reply
    Failed,
}

/// Request parameters for chat turns
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub temperature: f64,
    pub max_tokens: u32,
    pub greeting: Option<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            greeting: Some(DEFAULT_GREETING.to_string()),
        }
    }
}

impl ChatSettings {
    pub fn without_greeting(mut self) -> Self {
        self.greeting = None;
        self
    }
}

#[derive(Debug, Default)]
struct Transcript {
    messages: Vec<ChatMessage>,
    busy: bool,
    last_id: i64,
}

impl Transcript {
    /// Millisecond timestamp, bumped so ids stay strictly increasing even
    /// when two messages land in the same millisecond.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }
}

/// Ordered, append-only conversation with the chat endpoint.
///
/// At most one request is in flight per session; while busy, further sends
/// are ignored. Clones share the same transcript.
#[derive(Clone)]
pub struct ChatSession {
    api: Arc<dyn DashboardApi>,
    selected: SelectedModel,
    settings: ChatSettings,
    state: Arc<Mutex<Transcript>>,
    revision: Arc<watch::Sender<u64>>,
}

impl ChatSession {
    pub fn new(api: Arc<dyn DashboardApi>, selected: SelectedModel, settings: ChatSettings) -> Self {
        let mut transcript = Transcript::default();
        if let Some(greeting) = &settings.greeting {
            let id = transcript.next_id();
            transcript
                .messages
                .push(ChatMessage::plain(id, Role::Assistant, greeting.clone()));
        }

        let (revision, _) = watch::channel(0);

        Self {
            api,
            selected,
            settings,
            state: Arc::new(Mutex::new(transcript)),
            revision: Arc::new(revision),
        }
    }

    /// Send one user turn.
    ///
    /// The user message is appended before the request is issued; exactly one
    /// assistant message (reply or error) follows once it settles.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let content = text.trim();
        if content.is_empty() {
            return SendOutcome::Ignored;
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.busy {
                tracing::debug!("chat request already in flight, ignoring send");
                return SendOutcome::Ignored;
            }
            state.busy = true;
            let id = state.next_id();
            state.messages.push(ChatMessage::plain(id, Role::User, content));
        }
        self.touch();

        let model = self.selected.get();
        let request = ChatRequest::new(content, model.clone())
            .temperature(self.settings.temperature)
            .max_tokens(self.settings.max_tokens);

        tracing::info!(model = %model, chars = content.len(), "sending chat message");
        let result = self.api.chat(request).await;

        let outcome = {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            let (message, outcome) = match result {
                Ok(reply) => {
                    tracing::debug!(
                        trace_id = reply.trace_id.as_deref().unwrap_or(""),
                        processing_time_ms = reply.processing_time_ms.unwrap_or(0),
                        "chat reply received"
                    );
                    (ChatMessage::from_reply(id, reply), SendOutcome::Answered)
                }
                Err(e) => {
                    tracing::warn!("Chat error: {}", e);
                    (ChatMessage::from_error(id, &e), SendOutcome::Failed)
                }
            };
            state.messages.push(message);
            state.busy = false;
            outcome
        };
        self.touch();

        outcome
    }

    /// Snapshot of the transcript, oldest first
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().unwrap().messages.clone()
    }

    /// Messages from `index` onward
    pub fn messages_since(&self, index: usize) -> Vec<ChatMessage> {
        let state = self.state.lock().unwrap();
        state.messages.get(index..).map(<[_]>::to_vec).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    pub fn selected_model(&self) -> String {
        self.selected.get()
    }

    /// Receiver that changes after every transcript mutation; front ends use
    /// it to scroll to the newest message.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn touch(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}
