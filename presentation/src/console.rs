//! One-shot console mode
//!
//! Sends a single message through the same controller that backs the TUI
//! and prints the exchange. The transcript never renders here; whatever
//! the controller emits as MessageAppended is what gets printed.

use campus_application::{
    BehaviorConfig, ChatBackend, ChatCommand, ChatController, ConnectionStatus, HealthProbe,
    UiEvent,
};
use campus_domain::{Message, Sender, SegmentStyle, render_lines};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Console front-end for a single exchange
pub struct ConsoleChat {
    controller: ChatController,
    rx: mpsc::UnboundedReceiver<UiEvent>,
    show_spinner: bool,
}

impl ConsoleChat {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        probe: Arc<dyn HealthProbe>,
        behavior: BehaviorConfig,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        // An immediate answer reads better than a simulated typing pause
        let behavior = behavior.with_canned_delay_ms(0);
        Self {
            controller: ChatController::new(backend, probe, behavior, tx),
            rx,
            show_spinner: true,
        }
    }

    /// Set whether to show the waiting spinner
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Run one exchange and return the appended messages in order.
    pub async fn exchange(&mut self, message: &str) -> Vec<Message> {
        self.controller
            .handle(ChatCommand::Send(message.to_string()))
            .await;

        let mut messages = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            if let UiEvent::MessageAppended(msg) = event {
                messages.push(msg);
            }
        }
        messages
    }

    /// Send one message and print the exchange to stdout.
    pub async fn send(&mut self, message: &str) {
        let spinner = if self.show_spinner {
            Some(Self::spinner())
        } else {
            None
        };

        let messages = self.exchange(message).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        for msg in &messages {
            println!("{}", format_message(msg));
        }
    }

    /// Probe the backend once and print the result.
    pub async fn status(&mut self) {
        self.controller.handle(ChatCommand::CheckStatus).await;
        while let Ok(event) = self.rx.try_recv() {
            if let UiEvent::StatusChanged(status) = event {
                println!("{}", status_line(status));
            }
        }
    }

    fn spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("contacting assistant...");
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}

/// Format one message with a colored sender label.
pub fn format_message(message: &Message) -> String {
    let label = match message.sender {
        Sender::User => format!("{}:", message.sender.label()).cyan().bold(),
        Sender::Bot => format!("{}:", message.sender.label()).green().bold(),
    };
    format!(
        "{} {}  {}",
        label,
        format_markup(&message.text),
        message.timestamp.dimmed()
    )
}

/// Map inline markup to ANSI styles.
fn format_markup(text: &str) -> String {
    let mut out = String::new();
    for (i, segments) in render_lines(text).into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for segment in segments {
            let styled = match segment.style {
                SegmentStyle::Plain => segment.text.normal(),
                SegmentStyle::Bold => segment.text.bold(),
                SegmentStyle::Italic => segment.text.italic(),
                SegmentStyle::Code => segment.text.yellow(),
            };
            out.push_str(&styled.to_string());
        }
    }
    out
}

fn status_line(status: ConnectionStatus) -> String {
    let dot = match status {
        ConnectionStatus::Online => "●".green(),
        ConnectionStatus::Offline => "●".red(),
        ConnectionStatus::Unknown => "●".yellow(),
    };
    format!("{} {}", dot, status.label())
}
