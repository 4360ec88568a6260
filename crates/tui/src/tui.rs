//! Terminal setup and the input stream.
//!
//! `Tui` owns the raw-mode terminal. Its event stream merges crossterm input
//! with redraw requests; requests made before the next draw collapse into one.

use anyhow::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event,
    EventStream, KeyEvent, KeyEventKind, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io::{stdout, Stdout};
use std::pin::Pin;
use std::sync::Arc;
use tokio::select;
use tokio::sync::Notify;
use tokio_stream::{Stream, StreamExt};

/// Input for the app loop.
#[derive(Debug)]
pub enum TuiEvent {
    Key(KeyEvent),
    /// Bracketed paste.
    Paste(String),
    /// Mouse wheel, in lines: negative is up.
    Scroll(i64),
    Draw,
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    redraw: Arc<Notify>,
}

impl Tui {
    /// Enter raw mode and the alternate screen, with paste and mouse capture.
    pub fn init() -> Result<Self> {
        enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            EnableMouseCapture
        )?;
        set_panic_hook();

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout()))?,
            redraw: Arc::new(Notify::new()),
        })
    }

    pub fn restore(&mut self) -> Result<()> {
        leave_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn frame_requester(&self) -> FrameRequester {
        FrameRequester {
            redraw: Arc::clone(&self.redraw),
        }
    }

    pub fn event_stream(&self) -> Pin<Box<dyn Stream<Item = TuiEvent> + Send + 'static>> {
        let mut input = EventStream::new();
        let redraw = Arc::clone(&self.redraw);

        Box::pin(async_stream::stream! {
            loop {
                select! {
                    Some(Ok(event)) = input.next() => {
                        if let Some(event) = translate(event) {
                            yield event;
                        }
                    }
                    _ = redraw.notified() => {
                        yield TuiEvent::Draw;
                    }
                }
            }
        })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Asks the app loop for a redraw.
#[derive(Clone, Debug)]
pub struct FrameRequester {
    redraw: Arc<Notify>,
}

impl FrameRequester {
    pub fn schedule_frame(&self) {
        // Stores at most one permit, so a burst yields a single draw.
        self.redraw.notify_one();
    }
}

/// Map terminal input to app events. Key releases are dropped.
fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(TuiEvent::Key(key)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(TuiEvent::Scroll(1)),
            MouseEventKind::ScrollUp => Some(TuiEvent::Scroll(-1)),
            _ => None,
        },
        Event::Paste(text) => Some(TuiEvent::Paste(text)),
        Event::Resize(..) => Some(TuiEvent::Draw),
        _ => None,
    }
}

fn leave_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    Ok(())
}

fn set_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_terminal();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};
    use std::time::Duration;

    #[tokio::test]
    async fn test_frame_requests_coalesce() {
        let redraw = Arc::new(Notify::new());
        let requester = FrameRequester {
            redraw: Arc::clone(&redraw),
        };
        requester.schedule_frame();
        requester.schedule_frame();

        redraw.notified().await;
        let second = tokio::time::timeout(Duration::from_millis(20), redraw.notified()).await;
        assert!(second.is_err());
    }

    #[test]
    fn test_wheel_maps_to_scroll() {
        let wheel = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert!(matches!(
            translate(wheel(MouseEventKind::ScrollDown)),
            Some(TuiEvent::Scroll(1))
        ));
        assert!(matches!(
            translate(wheel(MouseEventKind::ScrollUp)),
            Some(TuiEvent::Scroll(-1))
        ));
        assert!(translate(wheel(MouseEventKind::Moved)).is_none());
    }

    #[test]
    fn test_key_release_is_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(Event::Key(release)).is_none());
        assert!(matches!(
            translate(Event::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(TuiEvent::Key(_))
        ));
    }
}
