//! # pf-tui
//!
//! Terminal presentation layer for portfolio-kit.
//!
//! This crate renders the portfolio page in the terminal and turns keys and
//! mouse wheel input into `Op`s. It talks to the page runtime in `pf-core`
//! only through channels, using the `Op` and `Event` protocol defined in
//! `pf-protocol`.

pub mod app;
pub mod event;
pub mod event_handler;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use anyhow::Result;
use pf_core::config::AppConfig;
use pf_core::page::spawn_page;
use pf_core::transport::Transport;
use pf_protocol::Op;
use std::sync::Arc;
use tracing::{info, warn};

/// Run the page in the terminal until the user quits.
///
/// Spawns the page runtime, drives the UI, then shuts the runtime down and
/// restores the terminal.
pub async fn run_app(config: AppConfig, transport: Arc<dyn Transport>) -> Result<()> {
    let handle = spawn_page(&config, transport);
    let content = Arc::new(config.content);

    let mut tui = Tui::init()?;
    let mut app = App::new(
        content,
        config.global.ui.scroll_step,
        handle.op_tx.clone(),
        handle.event_rx,
    );
    info!("portfolio page started");

    let result = app.run(&mut tui).await;

    let _ = handle.op_tx.send(Op::Shutdown);
    if let Err(err) = handle.join.await {
        warn!(error = %err, "page runtime did not shut down cleanly");
    }
    tui.restore()?;

    result
}
