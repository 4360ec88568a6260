//! Page event loop.
//!
//! `PageRuntime` is the single owner of a `Page`. It processes operations
//! from the UI and completions of its own background work one at a time, so
//! no two transitions ever interleave. Delivery and the success timer run as
//! tasks in a `JoinSet`; they only report results, and all state changes
//! happen back on the loop. Dropping the runtime (or `Op::Shutdown`) aborts
//! whatever is still pending.

use crate::form::SubmissionTicket;
use crate::page::state::{Effect, Page, Transition};
use crate::transport::{Transport, TransportError};
use pf_protocol::{Event, Op};
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Result of a background task, fed back into the loop.
#[derive(Debug)]
enum Completion {
    Delivered {
        ticket: SubmissionTicket,
        result: Result<(), TransportError>,
    },
    SuccessExpired {
        ticket: SubmissionTicket,
    },
}

pub struct PageRuntime {
    page: Page,
    transport: Arc<dyn Transport>,
    success_display: Duration,
    events_tx: UnboundedSender<Event>,
    tasks: JoinSet<Completion>,
}

impl PageRuntime {
    /// Create a runtime around `page`.
    ///
    /// # Arguments
    ///
    /// * `transport` - Delivers validated forms
    /// * `success_display` - How long the success message stays up
    /// * `events_tx` - Channel for sending events to the UI
    pub fn new(
        page: Page,
        transport: Arc<dyn Transport>,
        success_display: Duration,
        events_tx: UnboundedSender<Event>,
    ) -> Self {
        Self {
            page,
            transport,
            success_display,
            events_tx,
            tasks: JoinSet::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Number of deliveries and timers still pending.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Run until `Op::Shutdown` arrives or the UI drops its sender.
    ///
    /// Returns the page in its final state. Pending work is cancelled.
    pub async fn run(mut self, mut ops_rx: UnboundedReceiver<Op>) -> Page {
        loop {
            select! {
                op = ops_rx.recv() => {
                    match op {
                        Some(Op::Shutdown) | None => break,
                        Some(op) => self.handle_op(op),
                    }
                }
                Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    match joined {
                        Ok(completion) => self.handle_completion(completion),
                        Err(err) => warn!(error = %err, "page task did not complete"),
                    }
                }
            }
        }

        debug!(pending = self.tasks.len(), "page runtime shutting down");
        self.tasks.shutdown().await;
        self.page
    }

    /// Apply one operation and start any work it asks for.
    pub fn handle_op(&mut self, op: Op) {
        debug!(?op, "page op");
        let transition = self.page.apply(op);
        self.dispatch(transition);
    }

    /// Wait for the next background completion and apply it.
    ///
    /// Returns false when nothing is pending.
    pub async fn step(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Ok(completion)) => {
                self.handle_completion(completion);
                true
            }
            Some(Err(err)) => {
                warn!(error = %err, "page task did not complete");
                true
            }
            None => false,
        }
    }

    /// Drive background work until none is left.
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    fn handle_completion(&mut self, completion: Completion) {
        let transition = match completion {
            Completion::Delivered { ticket, result } => self.page.on_delivered(ticket, result),
            Completion::SuccessExpired { ticket } => self.page.on_success_expired(ticket),
        };
        self.dispatch(transition);
    }

    fn dispatch(&mut self, transition: Transition) {
        for event in transition.events {
            // The UI may already be gone during teardown.
            let _ = self.events_tx.send(event);
        }

        for effect in transition.effects {
            match effect {
                Effect::Deliver { ticket, data } => {
                    let transport = Arc::clone(&self.transport);
                    self.tasks.spawn(async move {
                        let result = transport.deliver(&data).await;
                        Completion::Delivered { ticket, result }
                    });
                }
                Effect::ExpireSuccess { ticket } => {
                    let delay = self.success_display;
                    self.tasks.spawn(async move {
                        tokio::time::sleep(delay).await;
                        Completion::SuccessExpired { ticket }
                    });
                }
            }
        }
    }
}
