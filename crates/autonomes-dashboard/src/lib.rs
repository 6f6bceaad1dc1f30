pub mod selected;
pub mod sequence;
pub mod chat;
pub mod models;
pub mod status;
pub mod page;
pub mod format;

pub use selected::{SelectedModel, DEFAULT_MODEL};
pub use chat::{ChatMessage, ChatSession, ChatSettings, Role, SendOutcome, DEFAULT_GREETING};
pub use models::{ModelLister, ModelListState};
pub use status::StatusFetcher;
pub use page::{PageComposer, PageSettings};
pub use format::Tone;

// Re-export the client crate so front ends need a single dependency
pub use autonomes_client as client;
