use std::sync::{Arc, Mutex};

use autonomes_client::{ApiError, DashboardApi, ModelInfo, PullAck};

use crate::selected::SelectedModel;
use crate::sequence::RequestSequence;

/// Lifecycle of the model list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelListState {
    /// No refresh has run yet
    Idle,
    Loading,
    /// Last refresh failed; the list is empty
    Error,
    /// Last refresh succeeded (the list may still be empty)
    Ready,
}

#[derive(Debug)]
struct Catalog {
    models: Vec<ModelInfo>,
    loading: bool,
    error: Option<String>,
    loaded: bool,
}

/// Fetches the available models and changes the shared selection
#[derive(Clone)]
pub struct ModelLister {
    api: Arc<dyn DashboardApi>,
    selected: SelectedModel,
    state: Arc<Mutex<Catalog>>,
    sequence: Arc<RequestSequence>,
}

impl ModelLister {
    pub fn new(api: Arc<dyn DashboardApi>, selected: SelectedModel) -> Self {
        Self {
            api,
            selected,
            state: Arc::new(Mutex::new(Catalog {
                models: Vec::new(),
                loading: false,
                error: None,
                loaded: false,
            })),
            sequence: Arc::new(RequestSequence::new()),
        }
    }

    /// Replace the model list with the server's current one.
    ///
    /// On failure the list is emptied and the error recorded. If another
    /// refresh was started meanwhile, this one's result is dropped.
    pub async fn refresh(&self) {
        let token = self.sequence.issue();
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.error = None;
        }

        let result = self.api.list_models().await;

        if !self.sequence.is_latest(token) {
            tracing::debug!(token, "discarding stale model list response");
            return;
        }

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(models) => {
                tracing::info!(count = models.len(), "model list refreshed");
                state.models = models;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch models: {}", e);
                state.models.clear();
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
        state.loaded = true;
    }

    /// Make `name` the active model. Not checked against the list.
    pub fn select(&self, name: impl Into<String>) {
        self.selected.set(name);
    }

    /// Ask the backend to download a model in the background
    pub async fn pull(&self, name: &str) -> Result<PullAck, ApiError> {
        tracing::info!(model = %name, "requesting model pull");
        self.api.pull_model(name).await.inspect_err(|e| {
            tracing::warn!("Failed to initiate model pull for {}: {}", name, e);
        })
    }

    pub fn models(&self) -> Vec<ModelInfo> {
        self.state.lock().unwrap().models.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn state(&self) -> ModelListState {
        let state = self.state.lock().unwrap();
        if state.loading {
            ModelListState::Loading
        } else if state.error.is_some() {
            ModelListState::Error
        } else if state.loaded {
            ModelListState::Ready
        } else {
            ModelListState::Idle
        }
    }

    pub fn selected(&self) -> String {
        self.selected.get()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.is(name)
    }
}
