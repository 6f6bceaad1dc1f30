#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use autonomes_client::{
    ApiError, ChatReply, ChatRequest, DashboardApi, DetailedStatus, HealthSnapshot, ModelInfo,
    PullAck, Result,
};
use tokio::sync::Notify;

/// Holds a scripted call open until the test releases it
#[derive(Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Wait until the gated call has started
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

struct Step<T> {
    reply: Result<T>,
    gate: Option<Arc<Gate>>,
}

type Script<T> = Mutex<VecDeque<Step<T>>>;

/// In-memory [`DashboardApi`] that replays scripted responses in order
#[derive(Default)]
pub struct FakeApi {
    chat: Script<ChatReply>,
    models: Script<Vec<ModelInfo>>,
    pulls: Script<PullAck>,
    health: Script<HealthSnapshot>,
    status: Script<DetailedStatus>,
    chat_requests: Mutex<Vec<ChatRequest>>,
    model_calls: AtomicUsize,
    health_calls: AtomicUsize,
    status_calls: AtomicUsize,
}

fn push<T>(script: &Script<T>, reply: Result<T>, gate: Option<Arc<Gate>>) {
    script.lock().unwrap().push_back(Step { reply, gate });
}

async fn next<T>(script: &Script<T>, what: &str) -> Result<T> {
    let step = script.lock().unwrap().pop_front();
    let step = step.unwrap_or_else(|| panic!("unexpected {} call", what));
    if let Some(gate) = step.gate {
        gate.entered.notify_one();
        gate.release.notified().await;
    }
    step.reply
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_chat(&self, reply: Result<ChatReply>) {
        push(&self.chat, reply, None);
    }

    pub fn push_chat_gated(&self, reply: Result<ChatReply>, gate: Arc<Gate>) {
        push(&self.chat, reply, Some(gate));
    }

    pub fn push_models(&self, reply: Result<Vec<ModelInfo>>) {
        push(&self.models, reply, None);
    }

    pub fn push_models_gated(&self, reply: Result<Vec<ModelInfo>>, gate: Arc<Gate>) {
        push(&self.models, reply, Some(gate));
    }

    pub fn push_pull(&self, reply: Result<PullAck>) {
        push(&self.pulls, reply, None);
    }

    pub fn push_health(&self, reply: Result<HealthSnapshot>) {
        push(&self.health, reply, None);
    }

    pub fn push_status(&self, reply: Result<DetailedStatus>) {
        push(&self.status, reply, None);
    }

    pub fn push_status_gated(&self, reply: Result<DetailedStatus>, gate: Arc<Gate>) {
        push(&self.status, reply, Some(gate));
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub fn model_calls(&self) -> usize {
        self.model_calls.load(Ordering::SeqCst)
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        self.chat_requests.lock().unwrap().push(request);
        next(&self.chat, "chat").await
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        self.model_calls.fetch_add(1, Ordering::SeqCst);
        next(&self.models, "list_models").await
    }

    async fn pull_model(&self, _name: &str) -> Result<PullAck> {
        next(&self.pulls, "pull_model").await
    }

    async fn health(&self) -> Result<HealthSnapshot> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        next(&self.health, "health").await
    }

    async fn status(&self) -> Result<DetailedStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        next(&self.status, "status").await
    }
}

pub fn server_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: String::new(),
    }
}

pub fn model(name: &str, family: &str) -> ModelInfo {
    let mut info = ModelInfo {
        name: name.to_string(),
        model: name.to_string(),
        size_bytes: 4_661_224_676,
        ..ModelInfo::default()
    };
    info.details.family = family.to_string();
    info.details.parameter_size = "8.0B".to_string();
    info.details.quantization = "Q4_0".to_string();
    info
}

pub fn reply(text: &str) -> ChatReply {
    ChatReply {
        response: text.to_string(),
        model_used: Some("llama3.1:8b".to_string()),
        tokens_used: Some(5),
        processing_time_ms: Some(250),
        trace_id: Some("abc123ef".to_string()),
    }
}
