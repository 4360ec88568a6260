//! Page state and its event loop.
//!
//! This module provides:
//! - `Page`: synchronous owner of all interaction state
//! - `PageRuntime`: the single-threaded loop that drives a `Page`
//! - `spawn_page`: wires a runtime to a pair of channels

pub mod runtime;
pub mod state;

pub use runtime::PageRuntime;
pub use state::{Effect, Page, Transition};

use crate::config::models::AppConfig;
use crate::transport::Transport;
use pf_protocol::{Event, Op};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Channel endpoints held by the UI for one running page.
pub struct PageHandle {
    /// Send operations to the page.
    pub op_tx: UnboundedSender<Op>,
    /// Receive events from the page.
    pub event_rx: UnboundedReceiver<Event>,
    /// Resolves to the final page state after shutdown.
    pub join: JoinHandle<Page>,
}

/// Build a page from `config` and run it on a background task.
pub fn spawn_page(config: &AppConfig, transport: Arc<dyn Transport>) -> PageHandle {
    let (op_tx, op_rx) = unbounded_channel();
    let (event_tx, event_rx) = unbounded_channel();

    let page = Page::new(Arc::new(config.content.clone()), &config.global);
    let runtime = PageRuntime::new(
        page,
        transport,
        Duration::from_millis(config.global.form.success_display_ms),
        event_tx,
    );

    let join = tokio::spawn(runtime.run(op_rx));

    PageHandle {
        op_tx,
        event_rx,
        join,
    }
}
