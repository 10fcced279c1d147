use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::{debug, info, warn};

use crate::assistant::{ChatRequest, Health, StreamEvent};

use super::AppState;

/// Message from the assistant worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatUpdate {
    Event(StreamEvent),
    Failed(String),
    Finished,
}

/// Outcome of the `/health` probe, as text when the service is unreachable.
pub(crate) type HealthUpdate = Result<Health, String>;

/// What the health check said about the assistant service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistantStatus {
    #[default]
    Unchecked,
    Checking,
    Ready,
    /// Unreachable, or reachable with AI features switched off.
    Unavailable,
}


impl AppState {
    /// Ask the service whether chat is available. Runs once; the answer is
    /// picked up by [`AppState::on_tick`].
    pub fn check_assistant(&mut self) {
        let Some(assistant) = self.assistant.as_ref().map(Arc::clone) else { return };
        if self.assistant_status != AssistantStatus::Unchecked {
            return;
        }
        self.assistant_status = AssistantStatus::Checking;
        let (tx, rx) = mpsc::channel();
        self.health_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(assistant.health().map_err(|err| err.to_string()));
        });
    }

    pub(crate) fn poll_health(&mut self) {
        let Some(rx) = self.health_rx.as_ref() else { return };
        let update = match rx.try_recv() {
            Ok(update) => update,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err("health check stopped".to_string()),
        };
        self.health_rx = None;
        match update {
            Ok(health) if health.ai_enabled => {
                let provider = health.ai_provider.as_deref().unwrap_or("unknown");
                info!(version = %health.version, %provider, "assistant ready");
                self.assistant_status = AssistantStatus::Ready;
            }
            Ok(health) => {
                warn!(status = %health.status, "assistant service has AI disabled");
                self.assistant_status = AssistantStatus::Unavailable;
                self.conversation.say(
                    "The assistant is not available right now: the service has no AI \
                     provider configured.",
                );
            }
            Err(err) => {
                warn!(%err, "assistant health check failed");
                self.assistant_status = AssistantStatus::Unavailable;
                self.conversation.say(format!("Cannot reach the assistant service ({err})."));
            }
        }
    }

    /// Send the typed message with the current range attached. The reply
    /// streams in on a worker thread and is folded in by [`AppState::on_tick`].
    pub(crate) fn send_chat(&mut self) {
        let Some(assistant) = self.assistant.as_ref().map(Arc::clone) else {
            self.notify_error("Assistant is disabled");
            return;
        };
        if self.assistant_status == AssistantStatus::Unavailable {
            self.notify_error("Assistant is unavailable");
            return;
        }
        if self.conversation.is_pending() {
            return;
        }
        let context = self.current().map(|r| r.context());
        let conversation_id = self.conversation.id().map(str::to_string);
        let request = match ChatRequest::new(&self.chat_input, conversation_id, context) {
            Ok(request) => request,
            Err(err) => {
                self.notify_error(err.to_string());
                return;
            }
        };
        self.conversation.begin(&request.message);
        self.chat_input.clear();

        let (tx, rx) = mpsc::channel();
        self.chat_rx = Some(rx);
        thread::spawn(move || {
            let mut forward = |ev: StreamEvent| {
                let _ = tx.send(ChatUpdate::Event(ev));
            };
            let update = match assistant.chat_stream(&request, &mut forward) {
                Ok(()) => ChatUpdate::Finished,
                Err(err) => {
                    warn!(%err, "assistant stream failed");
                    ChatUpdate::Failed(err.to_string())
                }
            };
            let _ = tx.send(update);
        });
    }

    /// Fold any updates the worker has produced so far.
    pub(crate) fn poll_chat(&mut self) {
        let Some(rx) = self.chat_rx.as_ref() else { return };
        let mut closed = false;
        let mut updates = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(update) => updates.push(update),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    closed = true;
                    break;
                }
            }
        }
        for update in updates {
            match update {
                ChatUpdate::Event(ev) => self.conversation.apply(ev),
                ChatUpdate::Failed(error) => self.conversation.fail(error),
                ChatUpdate::Finished => {
                    // stream ended without a done event
                    if self.conversation.is_pending() {
                        self.conversation.apply(StreamEvent::Done { timestamp: None });
                    }
                    closed = true;
                }
            }
        }
        if closed {
            self.chat_rx = None;
        }
    }

    /// Forget the conversation locally and ask the service to drop it.
    pub(crate) fn clear_chat(&mut self) {
        let assistant = self.assistant.as_ref().map(Arc::clone);
        if let (Some(assistant), Some(id)) = (assistant, self.conversation.id()) {
            let id = id.to_string();
            thread::spawn(move || {
                if let Err(err) = assistant.clear_conversation(&id) {
                    debug!(%err, %id, "clearing remote conversation failed");
                }
            });
        }
        self.chat_rx = None;
        self.conversation.reset();
    }
}
