use std::sync::{Arc, RwLock};

/// Model used before the first model list arrives
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Shared selected-model cell.
///
/// Owned by the [`crate::PageComposer`] and cloned into the chat session and
/// model lister; every clone reads and writes the same value. Names are not
/// validated against the model list.
#[derive(Debug, Clone)]
pub struct SelectedModel {
    inner: Arc<RwLock<String>>,
}

impl SelectedModel {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial.into())),
        }
    }

    pub fn get(&self) -> String {
        self.inner.read().unwrap().clone()
    }

    pub fn set(&self, name: impl Into<String>) {
        let name = name.into();
        tracing::info!(model = %name, "selected model changed");
        *self.inner.write().unwrap() = name;
    }

    pub fn is(&self, name: &str) -> bool {
        *self.inner.read().unwrap() == name
    }
}

impl Default for SelectedModel {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}
