//! Display helpers shared by front ends

use autonomes_client::HealthStatus;
use chrono::{DateTime, Local, Utc};

use crate::chat::ChatMessage;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Colour class of a status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Muted,
}

/// `4920753328` -> `"4.6 GB"`
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} GB", bytes as f64 / GIB)
}

pub fn family_icon(family: &str) -> &'static str {
    match family.to_lowercase().as_str() {
        "llama" => "🦙",
        "nomic-bert" => "📄",
        _ => "🤖",
    }
}

pub fn status_icon(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "✅",
        HealthStatus::Degraded => "⚠️",
        HealthStatus::Unhealthy => "❌",
        HealthStatus::Unknown => "❓",
    }
}

pub fn status_tone(status: HealthStatus) -> Tone {
    match status {
        HealthStatus::Healthy => Tone::Success,
        HealthStatus::Degraded => Tone::Warning,
        HealthStatus::Unhealthy => Tone::Error,
        HealthStatus::Unknown => Tone::Muted,
    }
}

/// `1234` -> `"1.2s"`
pub fn format_processing_time(ms: u64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}

/// First eight characters followed by an ellipsis
pub fn trace_prefix(trace_id: &str) -> String {
    let head: String = trace_id.chars().take(8).collect();
    format!("{}...", head)
}

/// Wall-clock time in the local timezone
pub fn format_clock(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Metadata lines shown under a chat message. Zero processing time and
/// empty values are left out.
pub fn message_metadata(message: &ChatMessage) -> Vec<String> {
    let mut lines = vec![format_clock(message.timestamp)];

    if let Some(model) = message.model.as_deref().filter(|m| !m.is_empty()) {
        lines.push(format!("Model: {}", model));
    }
    if let Some(ms) = message.processing_time_ms.filter(|ms| *ms > 0) {
        lines.push(format!("Time: {}", format_processing_time(ms)));
    }
    if let Some(trace_id) = message.trace_id.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("Trace: {}", trace_prefix(trace_id)));
    }

    lines
}
