//! Scheduled message polling
//!
//! Polls once immediately, then on every interval tick. Outcomes are
//! delivered on an unbounded channel. The task stops when cancelled, when the
//! [`PollTask`] is dropped, when the receiver goes away, or after the backend
//! rejects the session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{ChatController, PollOutcome};
use crate::client::{ChatApi, Message};
use crate::error::Error;

/// Event delivered to the poll consumer
#[derive(Debug)]
pub enum PollEvent {
    Messages(Vec<Message>),
    /// Session was cleared; the consumer should return to login
    SessionExpired,
    /// Any other fetch failure; polling continues
    Failed(Error),
}

/// Handle to a running poll loop
pub struct PollTask {
    handle: JoinHandle<()>,
    trigger: Arc<Notify>,
    shutdown: watch::Sender<bool>,
}

impl PollTask {
    /// Start polling on the current runtime
    pub fn spawn<C>(
        controller: Arc<ChatController<C>>,
        interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<PollEvent>)
    where
        C: ChatApi + 'static,
    {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let trigger = Arc::new(Notify::new());

        let handle = tokio::spawn(run_loop(
            controller,
            interval,
            Arc::clone(&trigger),
            shutdown_rx,
            events_tx,
        ));

        let task = Self {
            handle,
            trigger,
            shutdown: shutdown_tx,
        };
        (task, events_rx)
    }

    /// Request an extra poll outside the schedule
    pub fn poll_now(&self) {
        self.trigger.notify_one();
    }

    /// Stop the loop, dropping any in-flight request
    pub fn cancel(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Wait for the loop to exit
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            log::error!("Poll task ended abnormally: {}", e);
        }
    }
}

async fn run_loop<C: ChatApi>(
    controller: Arc<ChatController<C>>,
    interval: Duration,
    trigger: Arc<Notify>,
    mut shutdown: watch::Receiver<bool>,
    events: mpsc::UnboundedSender<PollEvent>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    log::debug!("Polling started ({:?} interval)", interval);

    loop {
        // First tick completes immediately
        tokio::select! {
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {}
            _ = trigger.notified() => log::debug!("Out-of-band poll"),
        }

        let outcome = tokio::select! {
            _ = shutdown.changed() => break,
            outcome = controller.poll() => outcome,
        };

        let event = match outcome {
            PollOutcome::Skipped => continue,
            PollOutcome::Messages(messages) => PollEvent::Messages(messages),
            PollOutcome::SessionExpired => {
                log::info!("Session rejected by server, stopping poll");
                let _ = events.send(PollEvent::SessionExpired);
                break;
            }
            PollOutcome::Failed(e) => {
                log::warn!("Failed to fetch messages: {}", e);
                PollEvent::Failed(e)
            }
        };

        if events.send(event).is_err() {
            break;
        }
    }

    log::debug!("Polling stopped");
}
