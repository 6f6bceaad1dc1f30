mod common;

use autonomes_client::{DetailedStatus, HealthSnapshot, HealthStatus};
use autonomes_dashboard::{ChatSettings, ModelListState, PageComposer, PageSettings, SendOutcome};
use common::{model, reply, server_error, FakeApi};
use serde_json::json;

fn healthy() -> HealthSnapshot {
    HealthSnapshot {
        status: HealthStatus::Healthy,
        ..HealthSnapshot::default()
    }
}

#[tokio::test]
async fn test_mount_loads_everything_once() {
    let api = FakeApi::new();
    api.push_health(Ok(healthy()));
    api.push_status(Ok(DetailedStatus(json!({"version": "2.1.0"}))));
    api.push_models(Ok(vec![model("llama3.1:8b", "llama")]));
    let page = PageComposer::new(api.clone(), PageSettings::default());

    assert_eq!(page.selected_model(), "llama3.1:8b");

    page.mount().await;

    assert_eq!(api.health_calls(), 1);
    assert_eq!(api.status_calls(), 1);
    assert_eq!(api.model_calls(), 1);
    assert_eq!(page.status().health().unwrap().status, HealthStatus::Healthy);
    assert_eq!(page.models().state(), ModelListState::Ready);
    assert_eq!(page.chat().len(), 1);
}

#[tokio::test]
async fn test_mount_survives_backend_outage() {
    let api = FakeApi::new();
    api.push_health(Err(server_error(502)));
    api.push_status(Err(server_error(502)));
    api.push_models(Err(server_error(502)));
    let page = PageComposer::new(api, PageSettings::default());

    page.mount().await;

    assert!(page.status().health().is_none());
    assert_eq!(page.models().state(), ModelListState::Error);
    assert_eq!(page.selected_model(), "llama3.1:8b");
}

#[tokio::test]
async fn test_selection_is_shared_between_components() {
    let api = FakeApi::new();
    api.push_chat(Ok(reply("sure")));
    let page = PageComposer::new(api.clone(), PageSettings::default());

    page.models().select("mistral:7b");

    assert_eq!(page.selected_model(), "mistral:7b");
    assert_eq!(page.chat().selected_model(), "mistral:7b");
    assert!(page.selected().is("mistral:7b"));

    assert_eq!(page.chat().send_message("hi").await, SendOutcome::Answered);
    assert_eq!(api.chat_requests()[0].model, "mistral:7b");

    page.set_selected_model("llama3.1:8b");
    assert!(page.models().is_selected("llama3.1:8b"));
}

#[tokio::test]
async fn test_custom_default_model() {
    let api = FakeApi::new();
    let settings = PageSettings {
        default_model: "qwen2:7b".to_string(),
        chat: ChatSettings::default().without_greeting(),
    };
    let page = PageComposer::new(api, settings);

    assert_eq!(page.selected_model(), "qwen2:7b");
    assert!(page.chat().is_empty());
}
