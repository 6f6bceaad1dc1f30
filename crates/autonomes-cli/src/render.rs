//! Plain-text rendering of dashboard state for the terminal

use std::fmt::Write;

use autonomes_client::{DetailedStatus, HealthSnapshot, ModelInfo};
use autonomes_dashboard::format::{
    family_icon, format_clock, format_size, message_metadata, status_icon, status_tone,
};
use autonomes_dashboard::{ChatMessage, ModelListState, ModelLister, Role, StatusFetcher, Tone};
use crossterm::style::{style, Color, Stylize};

use crate::commands::HELP;

pub const NO_MODELS: &str =
    "No models available. Make sure Ollama is running and has models installed.";

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Error => Color::Red,
        Tone::Muted => Color::DarkGrey,
    }
}

fn paint(text: impl std::fmt::Display, tone: Tone) -> String {
    style(text).with(tone_color(tone)).to_string()
}

fn muted(text: impl std::fmt::Display) -> String {
    paint(text, Tone::Muted)
}

pub fn paint_error(text: impl std::fmt::Display) -> String {
    paint(text, Tone::Error)
}

pub fn render_message(message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => style("You").with(Color::Blue).bold().to_string(),
        Role::Assistant => style("AutonomesAI").with(Color::Magenta).bold().to_string(),
    };

    let mut out = format!("{}\n{}\n", speaker, message.content);
    let metadata = message_metadata(message);
    if !metadata.is_empty() {
        let _ = writeln!(out, "{}", muted(metadata.join(" · ")));
    }
    out
}

pub fn render_thinking(model: &str) -> String {
    muted(format!("Thinking with {}...", model))
}

pub fn render_models(lister: &ModelLister) -> String {
    render_model_list(
        lister.state(),
        &lister.models(),
        lister.error().as_deref(),
        &lister.selected(),
    )
}

pub fn render_model_list(
    state: ModelListState,
    models: &[ModelInfo],
    error: Option<&str>,
    selected: &str,
) -> String {
    match state {
        ModelListState::Idle => return muted("Models not loaded yet. Type /refresh to load them.\n"),
        ModelListState::Loading => return muted("Loading models...\n"),
        ModelListState::Error => {
            let error = error.unwrap_or("Failed to fetch models");
            return format!(
                "{}\n{}\n",
                paint(format!("❌ {}", error), Tone::Error),
                muted("Type /refresh to retry.")
            );
        }
        ModelListState::Ready => {}
    }

    if models.is_empty() {
        return format!("{}\n", muted(NO_MODELS));
    }

    let mut out = String::new();
    for model in models {
        let active = model.name == selected;
        let name = if active {
            style(model.name.as_str()).bold().to_string()
        } else {
            model.name.clone()
        };
        let badge = if active {
            format!(" {}", style("Active").with(Color::Blue).bold())
        } else {
            String::new()
        };

        let _ = writeln!(out, "{} {}{}", family_icon(&model.details.family), name, badge);

        let mut facts = vec![format!("Size: {}", format_size(model.size_bytes))];
        if !model.details.parameter_size.is_empty() {
            facts.push(format!("Parameters: {}", model.details.parameter_size));
        }
        if !model.details.quantization.is_empty() {
            facts.push(format!("Quantization: {}", model.details.quantization));
        }
        let _ = writeln!(out, "   {}", muted(facts.join(" · ")));
    }
    out
}

pub fn render_status(fetcher: &StatusFetcher) -> String {
    render_status_panel(
        fetcher.health().as_ref(),
        fetcher.detailed().as_ref(),
        fetcher.is_refreshing(),
    )
}

pub fn render_status_panel(
    health: Option<&HealthSnapshot>,
    detailed: Option<&DetailedStatus>,
    refreshing: bool,
) -> String {
    let mut out = String::new();

    if refreshing {
        let _ = writeln!(out, "{}", muted("🔄 Refreshing..."));
    }

    if health.is_none() && detailed.is_none() {
        let _ = writeln!(out, "{}", muted("System status unavailable. Type /health to retry."));
        return out;
    }

    if let Some(health) = health {
        let overall = format!("{} {}", status_icon(health.status), health.status);
        let _ = writeln!(
            out,
            "Overall Status: {}",
            paint(overall, status_tone(health.status))
        );
        for (service, status) in &health.services {
            let _ = writeln!(
                out,
                "  {:<12} {}",
                service,
                paint(status_icon(*status), status_tone(*status))
            );
        }
    }

    if let Some(detailed) = detailed {
        let _ = writeln!(out, "Version: {}", detailed.version().unwrap_or("-"));
        let _ = writeln!(out, "Environment: {}", detailed.environment().unwrap_or("-"));
        if let Some(count) = detailed.models_count() {
            let _ = writeln!(out, "Models Available: {}", count);
        }
        if let Some(enabled) = detailed.traces_enabled() {
            let flag = if enabled { "✅" } else { "❌" };
            let _ = writeln!(out, "Tracing: {}", flag);
        }
    }

    if let Some(timestamp) = health.and_then(|h| h.timestamp) {
        let _ = writeln!(out, "{}", muted(format!("Updated: {}", format_clock(timestamp))));
    }

    out
}

pub fn render_help() -> String {
    let mut out = String::new();
    for (usage, summary) in HELP {
        let _ = writeln!(out, "  {} {}", style(format!("{:<18}", usage)).bold(), summary);
    }
    out
}
