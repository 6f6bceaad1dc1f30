use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use autonomes_dashboard::{ChatSession, PageComposer};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::Command;
use crate::render::{
    paint_error, render_help, render_message, render_models, render_status, render_thinking,
};

/// What the loop does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading; print the text if it is not empty
    Continue(String),
    Quit,
}

impl Flow {
    fn print(text: impl Into<String>) -> Self {
        Flow::Continue(text.into())
    }

    fn silent() -> Self {
        Flow::Continue(String::new())
    }
}

/// Run one command against the dashboard.
///
/// Chat turns are spawned and return immediately; their messages reach the
/// terminal through the transcript follower.
pub async fn handle(page: &PageComposer, command: Command) -> Flow {
    match command {
        Command::Empty => Flow::silent(),
        Command::Quit => Flow::Quit,
        Command::Help => Flow::print(render_help()),
        Command::Chat(text) => {
            let chat = page.chat().clone();
            if chat.is_busy() {
                return Flow::print(paint_error("Still waiting for the previous reply."));
            }
            tokio::spawn(async move {
                chat.send_message(&text).await;
            });
            Flow::silent()
        }
        Command::Models => Flow::print(render_models(page.models())),
        Command::Refresh => {
            page.models().refresh().await;
            Flow::print(render_models(page.models()))
        }
        Command::Select(name) => {
            page.set_selected_model(name.as_str());
            let listed = page.models().models().iter().any(|m| m.name == name);
            if listed {
                Flow::print(format!("Active model: {}", name))
            } else {
                Flow::print(format!("Active model: {} (not in the model list)", name))
            }
        }
        Command::Pull(name) => match page.models().pull(&name).await {
            Ok(ack) if ack.message.is_empty() => Flow::print(format!("Pull of {} requested", name)),
            Ok(ack) => Flow::print(ack.message),
            Err(e) => Flow::print(paint_error(format!("❌ Failed to pull {}: {}", name, e))),
        },
        Command::Status => Flow::print(render_status(page.status())),
        Command::Health => {
            page.status().refresh_all().await;
            Flow::print(render_status(page.status()))
        }
        Command::Usage(usage) => Flow::print(format!("Usage: {}", usage)),
        Command::Unknown(name) => Flow::print(paint_error(format!(
            "Unknown command /{}. Type /help for the list.",
            name
        ))),
    }
}

/// Print new transcript messages as they land, plus a thinking line while a
/// request is in flight.
fn follow_transcript(chat: ChatSession) -> tokio::task::JoinHandle<()> {
    let mut updates = chat.subscribe();
    let mut shown = chat.len();

    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let fresh = chat.messages_since(shown);
            shown += fresh.len();

            let mut stdout = std::io::stdout().lock();
            for message in &fresh {
                let _ = writeln!(stdout, "{}", render_message(message));
            }
            if chat.is_busy() {
                let _ = writeln!(stdout, "{}", render_thinking(&chat.selected_model()));
            }
            let _ = stdout.flush();
        }
    })
}

/// Line-oriented loop over stdin until `/quit` or end of input
pub async fn run(page: Arc<PageComposer>) -> anyhow::Result<()> {
    println!("Autonomes dashboard · model {} · /help for commands\n", page.selected_model());
    for message in page.chat().messages() {
        println!("{}", render_message(&message));
    }

    let follower = follow_transcript(page.chat().clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        match handle(&page, Command::parse(&line)).await {
            Flow::Continue(text) if text.is_empty() => {}
            Flow::Continue(text) => println!("{}", text.trim_end()),
            Flow::Quit => break,
        }
    }

    follower.abort();
    tracing::info!("dashboard closed");
    Ok(())
}
