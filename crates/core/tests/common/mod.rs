//! Shared helpers for the page runtime integration tests.

use pf_core::config::AppConfig;
use pf_core::page::{Page, PageRuntime};
use pf_core::transport::Transport;
use pf_protocol::{Event, FormField, GlobalConfig, Op};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

pub fn builtin_page() -> Page {
    let config = AppConfig::builtin().expect("built-in config should load");
    Page::new(Arc::new(config.content), &GlobalConfig::default())
}

/// A runtime over the built-in page plus the receiving end of its events.
pub fn runtime_with(transport: Arc<dyn Transport>) -> (PageRuntime, UnboundedReceiver<Event>) {
    let (events_tx, events_rx) = unbounded_channel();
    let runtime = PageRuntime::new(builtin_page(), transport, SUCCESS_DISPLAY, events_tx);
    (runtime, events_rx)
}

/// Ops that fill the form with a valid submission.
pub fn valid_form_ops() -> Vec<Op> {
    vec![
        Op::EditField {
            field: FormField::Name,
            value: "A".to_string(),
        },
        Op::EditField {
            field: FormField::Email,
            value: "a@b.com".to_string(),
        },
        Op::EditField {
            field: FormField::Message,
            value: "this is long enough".to_string(),
        },
    ]
}

pub fn fill_valid(runtime: &mut PageRuntime) {
    for op in valid_form_ops() {
        runtime.handle_op(op);
    }
}

pub fn drain(rx: &mut UnboundedReceiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
