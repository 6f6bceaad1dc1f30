use std::sync::Arc;

use autonomes_client::DashboardApi;

use crate::chat::{ChatSession, ChatSettings};
use crate::models::ModelLister;
use crate::selected::{SelectedModel, DEFAULT_MODEL};
use crate::status::StatusFetcher;

#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub default_model: String,
    pub chat: ChatSettings,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
            chat: ChatSettings::default(),
        }
    }
}

/// The whole dashboard: one chat session, the model list and system status,
/// wired to a single shared selected-model cell.
pub struct PageComposer {
    selected: SelectedModel,
    chat: ChatSession,
    models: ModelLister,
    status: StatusFetcher,
}

impl PageComposer {
    pub fn new(api: Arc<dyn DashboardApi>, settings: PageSettings) -> Self {
        let selected = SelectedModel::new(settings.default_model);

        Self {
            chat: ChatSession::new(api.clone(), selected.clone(), settings.chat),
            models: ModelLister::new(api.clone(), selected.clone()),
            status: StatusFetcher::new(api),
            selected,
        }
    }

    /// Initial load: health, detailed status and the model list, concurrently.
    pub async fn mount(&self) {
        tracing::info!(model = %self.selected.get(), "mounting dashboard");
        futures::join!(
            self.status.fetch_health(),
            self.status.fetch_detailed_status(),
            self.models.refresh(),
        );
    }

    pub fn selected_model(&self) -> String {
        self.selected.get()
    }

    pub fn set_selected_model(&self, name: impl Into<String>) {
        self.selected.set(name);
    }

    /// The shared cell itself, for components built outside the page
    pub fn selected(&self) -> &SelectedModel {
        &self.selected
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn models(&self) -> &ModelLister {
        &self.models
    }

    pub fn status(&self) -> &StatusFetcher {
        &self.status
    }
}
