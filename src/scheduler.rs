//! Deferred computer replies.
//!
//! The computer's "thinking" pause is a tokio task that sleeps and then
//! posts [`Command::ComputerMove`] back to the event loop. A reset aborts the
//! task; the controller still checks the ticket if a reply slips through.

use crate::session::{Command, MoveTicket, SessionEvent};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Runs at most one pending computer reply.
#[derive(Debug)]
pub struct ComputerScheduler {
    delay: Duration,
    sender: UnboundedSender<Command>,
    pending: Option<JoinHandle<()>>,
}

impl ComputerScheduler {
    /// Creates a scheduler that posts replies to `sender` after `delay`.
    pub fn new(delay: Duration, sender: UnboundedSender<Command>) -> Self {
        Self {
            delay,
            sender,
            pending: None,
        }
    }

    /// Starts the delay for `ticket`, replacing any pending reply.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: MoveTicket) {
        self.cancel();
        let sender = self.sender.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(Command::ComputerMove(ticket)).is_err() {
                debug!(?ticket, "Event loop gone before computer reply");
            }
        }));
    }

    /// Aborts the pending reply, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer reply");
            handle.abort();
        }
    }

    /// True while a reply is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Reacts to the events of one dispatch.
    pub fn observe(&mut self, events: &[SessionEvent]) {
        for event in events {
            match event {
                SessionEvent::ComputerScheduled(ticket) => self.schedule(*ticket),
                SessionEvent::GameReset { .. } => self.cancel(),
                _ => {}
            }
        }
    }
}

impl Drop for ComputerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
