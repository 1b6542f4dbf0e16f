//! Chat Controller
//!
//! Owns the canonical transcript and the message exchange pipeline.
//! Commands arrive over a channel and are processed one at a time, so there
//! is never more than one backend exchange in flight. Every state change is
//! emitted as a [`UiEvent`] for the presentation layer to render.

use crate::config::BehaviorConfig;
use crate::ports::chat_backend::ChatBackend;
use crate::ports::health::{ConnectionStatus, HealthProbe};
use crate::ports::ui_event::{Notice, UiEvent};
use campus_domain::util::preview;
use campus_domain::{Message, Transcript, canned};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Commands the presentation layer sends to the controller
#[derive(Debug, Clone)]
pub enum ChatCommand {
    /// Run one user message through the exchange pipeline
    Send(String),
    /// Clear the transcript; the caller has already confirmed
    ClearConfirmed,
    /// Probe the backend now and report the result
    CheckStatus,
}

/// Chat controller managing the conversation state
///
/// This controller lives in the application layer and handles:
/// - The message exchange pipeline (append, wait, send, render reply)
/// - Canned replies answered without a backend round trip
/// - Transcript clearing and on-demand status checks
/// - Emitting UiEvents to a channel for the presentation layer
pub struct ChatController {
    backend: Arc<dyn ChatBackend>,
    probe: Arc<dyn HealthProbe>,
    config: BehaviorConfig,
    transcript: Transcript,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChatController {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        probe: Arc<dyn HealthProbe>,
        config: BehaviorConfig,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            backend,
            probe,
            config,
            transcript: Transcript::new(),
            tx,
        }
    }

    /// The canonical transcript. The event stream mirrors it in order.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Push the greeting and announce the session.
    pub fn start(&mut self) {
        debug!("Chat session starting");
        let welcome = Message::bot(self.config.welcome_text.clone(), current_time());
        self.append(welcome);
        let _ = self
            .tx
            .send(UiEvent::Notice(Notice::success("Welcome to Campus Chat!")));
    }

    /// Consume commands until the sender side is dropped.
    ///
    /// Processing is strictly sequential, which is what keeps the
    /// one-exchange-at-a-time guarantee.
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<ChatCommand>) {
        self.start();
        while let Some(cmd) = rx.recv().await {
            self.handle(cmd).await;
        }
        debug!("Chat controller shutting down");
    }

    /// Dispatch a single command.
    pub async fn handle(&mut self, cmd: ChatCommand) {
        match cmd {
            ChatCommand::Send(text) => self.process_message(&text).await,
            ChatCommand::ClearConfirmed => self.clear_transcript(),
            ChatCommand::CheckStatus => self.check_status().await,
        }
    }

    /// Run one message through the exchange pipeline:
    ///
    /// 1. Trim; drop the message when nothing remains.
    /// 2. Append the user message before any network activity.
    /// 3. Canned phrases get a local reply after a short delay and skip the
    ///    rest of the pipeline, waiting indicator included.
    /// 4. Show the waiting indicator, send, hide it once the exchange
    ///    settles. `WaitingEnded` fires exactly once per `WaitingStarted`.
    /// 5. Append the reply, or the fallback text for the failure kind.
    pub async fn process_message(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        self.append(Message::user(trimmed, current_time()));

        if let Some(reply) = canned::reply_for(trimmed) {
            debug!("Canned reply for {:?}", trimmed);
            tokio::time::sleep(self.config.canned_delay).await;
            self.append(Message::bot(reply, current_time()));
            return;
        }

        info!("Sending message: {}", preview(trimmed, 80));
        let _ = self.tx.send(UiEvent::WaitingStarted);
        let result = self.backend.send(trimmed).await;
        let _ = self.tx.send(UiEvent::WaitingEnded);

        match result {
            Ok(reply) => {
                debug!("Reply received ({} bytes)", reply.len());
                self.append(Message::bot(reply, current_time()));
            }
            Err(err) => {
                warn!("Exchange failed: {}", err);
                self.append(Message::bot(err.fallback_text(), current_time()));
            }
        }
    }

    /// Drop the conversation, keeping the greeting with a fresh timestamp.
    fn clear_transcript(&mut self) {
        let welcome = self
            .transcript
            .clear_retaining_welcome(current_time())
            .cloned();
        info!("Transcript cleared");
        let _ = self.tx.send(UiEvent::TranscriptCleared { welcome });
    }

    /// Probe the backend once and report the outcome.
    ///
    /// Unlike the periodic monitor this always emits, so an explicit check
    /// gives feedback even when nothing changed.
    async fn check_status(&mut self) {
        let status = self.probe.check().await;
        debug!("Manual status check: {}", status);
        let _ = self.tx.send(UiEvent::StatusChanged(status));
        let notice = match status {
            ConnectionStatus::Online => Notice::success("Backend online"),
            _ => Notice::error("Backend offline"),
        };
        let _ = self.tx.send(UiEvent::Notice(notice));
    }

    fn append(&mut self, message: Message) {
        self.transcript.push(message.clone());
        let _ = self.tx.send(UiEvent::MessageAppended(message));
    }
}

/// Wall-clock time formatted for message bubbles.
fn current_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
