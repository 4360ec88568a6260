//! TUI application state and event loop.
//!
//! This module defines the main `App` struct that mirrors the page state
//! and runs the event loop using `tokio::select!`.

use anyhow::Result;
use crossterm::event::KeyEvent;
use pf_protocol::{Event, Op, PortfolioContent, Section, UiSnapshot};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;
use std::sync::Arc;
use tokio::select;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_stream::StreamExt;
use tracing::debug;

use crate::event_handler::{self, send, KeyOutcome};
use crate::tui::{Tui, TuiEvent};
use crate::widgets::document::render_document;
use crate::widgets::header::{render_header, HEADER_HEIGHT};
use crate::widgets::overlay::{render_mobile_menu, render_skill_overlay};
use crate::widgets::{build_document, Document, FormInput, Palette};

/// Body width assumed before the first frame is drawn.
const INITIAL_WIDTH: u16 = 80;

/// Main TUI application state.
pub struct App {
    /// Read-only page content.
    pub content: Arc<PortfolioContent>,
    /// Latest state reported by the core.
    pub snapshot: UiSnapshot,
    /// Focus and draft of the contact form.
    pub form: FormInput,
    /// Scroll offset in core units.
    pub offset: u32,
    /// Core units per line.
    pub scroll_step: u32,
    /// Channel to send operations to the core.
    pub op_tx: UnboundedSender<Op>,
    /// Channel to receive events from the core.
    pub event_rx: UnboundedReceiver<Event>,
    /// Flag to indicate if the application should exit.
    pub should_exit: bool,
    /// Layout of the last drawn frame.
    document: Document,
}

impl App {
    /// Create a new App with communication channels.
    pub fn new(
        content: Arc<PortfolioContent>,
        scroll_step: u32,
        op_tx: UnboundedSender<Op>,
        event_rx: UnboundedReceiver<Event>,
    ) -> Self {
        let snapshot = UiSnapshot::initial();
        let form = FormInput::new();
        let document = build_document(
            &content,
            &snapshot,
            form.focus(),
            &Palette::for_theme(snapshot.theme),
            INITIAL_WIDTH,
        );

        Self {
            content,
            snapshot,
            form,
            offset: 0,
            scroll_step: scroll_step.max(1),
            op_tx,
            event_rx,
            should_exit: false,
            document,
        }
    }

    /// Main event loop.
    ///
    /// Uses `tokio::select!` to handle terminal input and core events concurrently.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();

        tui.frame_requester().schedule_frame();

        while !self.should_exit {
            select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_core_event(event);
                    tui.frame_requester().schedule_frame();
                }
                Some(tui_event) = tui_events.next() => {
                    self.handle_tui_event(tui, tui_event)?;
                }
                else => break,
            }
        }

        Ok(())
    }

    /// Handle events from the core (pf-core).
    fn handle_core_event(&mut self, event: Event) {
        if let Some(section) =
            event_handler::handle_core_event(&mut self.snapshot, &mut self.form, event)
        {
            self.jump_to(section);
        }
    }

    /// Handle TUI events (keyboard input, mouse wheel, paste, draw).
    fn handle_tui_event(&mut self, tui: &mut Tui, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key_event) => {
                self.handle_key_event(key_event);
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::Paste(text) => {
                if let Some(op) = self.form.insert_str(&text) {
                    send(&self.op_tx, op);
                }
            }
            TuiEvent::Scroll(lines) => {
                self.scroll_lines(lines);
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::Draw => {
                tui.draw(|frame| {
                    self.render(frame);
                })?;
            }
        }
        Ok(())
    }

    /// Handle keyboard events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let outcome = event_handler::handle_keyboard_event(
            key_event,
            &self.snapshot,
            &mut self.form,
            &self.op_tx,
        );
        match outcome {
            KeyOutcome::Quit => self.should_exit = true,
            KeyOutcome::Scroll(lines) => self.scroll_lines(lines),
            KeyOutcome::EnterForm => {
                self.form.focus_next();
                send(
                    &self.op_tx,
                    Op::NavigateTo {
                        section: Section::Contact,
                    },
                );
            }
            KeyOutcome::Handled | KeyOutcome::Ignored => {}
        }
    }

    /// First line shown at the top of the body.
    pub fn top_line(&self) -> usize {
        (self.offset / self.scroll_step) as usize
    }

    fn scroll_lines(&mut self, delta: i64) {
        let max_line = self.document.len().saturating_sub(1) as i64;
        let line = (self.top_line() as i64).saturating_add(delta).clamp(0, max_line);
        self.set_line(line as usize);
    }

    fn jump_to(&mut self, section: Section) {
        self.set_line(self.document.anchor(section));
    }

    /// Scroll to `line` and report the new offset to the core.
    fn set_line(&mut self, line: usize) {
        let offset = u32::try_from(line)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.scroll_step);
        if offset != self.offset {
            self.offset = offset;
            debug!(offset, "scrolled");
            send(&self.op_tx, Op::Scroll { offset });
        }
    }

    /// Render the TUI.
    pub fn render(&mut self, frame: &mut Frame) {
        let palette = Palette::for_theme(self.snapshot.theme);
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base()), area);

        let (header_area, body_area) = if self.snapshot.header_visible {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                .split(area);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, area)
        };

        // Leave a column for the scrollbar.
        let text_width = body_area.width.saturating_sub(1);
        self.document = build_document(
            &self.content,
            &self.snapshot,
            self.form.focus(),
            &palette,
            text_width,
        );
        let body = Rect {
            width: text_width,
            ..body_area
        };
        render_document(frame, body, &self.document, self.top_line(), &palette);

        if let Some(header_area) = header_area {
            render_header(
                frame,
                header_area,
                &self.content.profile,
                self.snapshot.theme,
                self.snapshot.mobile_menu_open,
                &palette,
            );
        }

        if self.snapshot.mobile_menu_open {
            render_mobile_menu(frame, body_area, &palette);
        }

        if let Some(category) = self.snapshot.selected_skill {
            render_skill_overlay(
                frame,
                area,
                category,
                self.content.skill(category),
                &palette,
            );
        }
    }
}
