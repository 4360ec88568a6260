//! Event handling utilities for the TUI.
//!
//! This module provides functions for handling different types of events:
//! - Core events (from pf-core), folded into the rendered snapshot
//! - Keyboard events (user input), turned into `Op`s
//!
//! Key handling is a chain: an open skill overlay sees keys first, then the
//! mobile menu, then the focused form field, then the page itself.

use crate::event::EventStatus;
use crate::widgets::FormInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pf_protocol::{Event, Op, Section, SkillCategory, UiSnapshot};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// What the app should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Leave the application.
    Quit,
    /// Move the page by this many lines; negative is up.
    Scroll(i64),
    /// Jump to a section and enter the contact form.
    EnterForm,
    /// The key was handled.
    Handled,
    /// Nothing is bound to the key here.
    Ignored,
}

/// Lines moved by PageUp/PageDown.
pub const PAGE_LINES: i64 = 10;

/// Apply an event received from the core to the rendered snapshot.
///
/// Returns the section to scroll to for `Event::ScrollRequested`.
pub fn handle_core_event(
    snapshot: &mut UiSnapshot,
    form: &mut FormInput,
    event: Event,
) -> Option<Section> {
    match event {
        Event::HeaderVisibilityChanged { visible } => snapshot.header_visible = visible,
        Event::MobileMenuChanged { open } => snapshot.mobile_menu_open = open,
        Event::SkillSelectionChanged { selected } => snapshot.selected_skill = selected,
        Event::ThemeChanged { theme } => snapshot.theme = theme,
        Event::ScrollRequested { section } => return Some(section),
        Event::FormUpdated { data, errors } => {
            form.sync(&data);
            snapshot.form = data;
            snapshot.errors = errors;
        }
        Event::SubmissionStarted => {
            snapshot.is_submitting = true;
            snapshot.succeeded = false;
        }
        Event::SubmissionSucceeded => {
            snapshot.is_submitting = false;
            snapshot.succeeded = true;
        }
        Event::SubmissionFailed { .. } => {
            snapshot.is_submitting = false;
        }
        Event::SuccessExpired => snapshot.succeeded = false,
    }
    None
}

/// Handle a keyboard event from the user.
pub fn handle_keyboard_event(
    key_event: KeyEvent,
    snapshot: &UiSnapshot,
    form: &mut FormInput,
    op_tx: &UnboundedSender<Op>,
) -> KeyOutcome {
    if key_event.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return KeyOutcome::Quit;
    }

    if handle_overlay_key(key_event, snapshot, op_tx) == EventStatus::Consumed {
        return KeyOutcome::Handled;
    }

    if handle_menu_key(key_event, snapshot, op_tx) == EventStatus::Consumed {
        return KeyOutcome::Handled;
    }

    if form.is_active() {
        return handle_form_key(key_event, form, op_tx);
    }

    handle_page_key(key_event, op_tx)
}

/// The skill overlay is modal: it takes every key while open.
fn handle_overlay_key(
    key_event: KeyEvent,
    snapshot: &UiSnapshot,
    op_tx: &UnboundedSender<Op>,
) -> EventStatus {
    if snapshot.selected_skill.is_none() {
        return EventStatus::NotConsumed;
    }

    if matches!(
        key_event.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q')
    ) {
        send(op_tx, Op::ClearSkillSelection);
    }
    EventStatus::Consumed
}

fn handle_menu_key(
    key_event: KeyEvent,
    snapshot: &UiSnapshot,
    op_tx: &UnboundedSender<Op>,
) -> EventStatus {
    if snapshot.mobile_menu_open && key_event.code == KeyCode::Esc {
        send(op_tx, Op::CloseMobileMenu);
        return EventStatus::Consumed;
    }
    EventStatus::NotConsumed
}

fn handle_form_key(
    key_event: KeyEvent,
    form: &mut FormInput,
    op_tx: &UnboundedSender<Op>,
) -> KeyOutcome {
    let edit = match key_event.code {
        KeyCode::Esc => {
            form.unfocus();
            return KeyOutcome::Handled;
        }
        KeyCode::Tab => {
            form.focus_next();
            return KeyOutcome::Handled;
        }
        KeyCode::Enter => {
            send(op_tx, Op::Submit);
            return KeyOutcome::Handled;
        }
        KeyCode::Backspace => form.delete_char(),
        KeyCode::Char(c) => form.insert_char(c),
        _ => return KeyOutcome::Ignored,
    };

    if let Some(op) = edit {
        send(op_tx, op);
    }
    KeyOutcome::Handled
}

fn handle_page_key(key_event: KeyEvent, op_tx: &UnboundedSender<Op>) -> KeyOutcome {
    let op = match key_event.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('j') | KeyCode::Down => return KeyOutcome::Scroll(1),
        KeyCode::Char('k') | KeyCode::Up => return KeyOutcome::Scroll(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => return KeyOutcome::Scroll(PAGE_LINES),
        KeyCode::PageUp => return KeyOutcome::Scroll(-PAGE_LINES),
        KeyCode::Home => return KeyOutcome::Scroll(i64::MIN),
        KeyCode::End => return KeyOutcome::Scroll(i64::MAX),
        KeyCode::Tab => return KeyOutcome::EnterForm,
        KeyCode::Char('m') => Op::ToggleMobileMenu,
        KeyCode::Char('t') => Op::ToggleTheme,
        KeyCode::Char('s') => Op::NavigateTo {
            section: Section::Skills,
        },
        KeyCode::Char('p') => Op::NavigateTo {
            section: Section::Projects,
        },
        KeyCode::Char('c') => Op::NavigateTo {
            section: Section::Contact,
        },
        KeyCode::Char(digit @ '1'..='4') => {
            let index = usize::from(digit as u8 - b'1');
            Op::SelectSkill {
                category: SkillCategory::ALL[index],
            }
        }
        _ => return KeyOutcome::Ignored,
    };

    send(op_tx, op);
    KeyOutcome::Handled
}

pub(crate) fn send(op_tx: &UnboundedSender<Op>, op: Op) {
    if op_tx.send(op).is_err() {
        debug!("page runtime has stopped; op dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_protocol::{ContactFormData, FormErrors, FormField, Theme};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn drain(rx: &mut UnboundedReceiver<Op>) -> Vec<Op> {
        let mut ops = Vec::new();
        while let Ok(op) = rx.try_recv() {
            ops.push(op);
        }
        ops
    }

    fn press(
        code: KeyCode,
        snapshot: &UiSnapshot,
        form: &mut FormInput,
        op_tx: &UnboundedSender<Op>,
    ) -> KeyOutcome {
        handle_keyboard_event(KeyEvent::from(code), snapshot, form, op_tx)
    }

    #[test]
    fn test_core_events_update_snapshot() {
        let mut snapshot = UiSnapshot::initial();
        let mut form = FormInput::new();

        handle_core_event(
            &mut snapshot,
            &mut form,
            Event::HeaderVisibilityChanged { visible: false },
        );
        handle_core_event(&mut snapshot, &mut form, Event::ThemeChanged { theme: Theme::Dark });
        handle_core_event(&mut snapshot, &mut form, Event::SubmissionStarted);

        assert!(!snapshot.header_visible);
        assert_eq!(snapshot.theme, Theme::Dark);
        assert!(snapshot.is_submitting);

        handle_core_event(&mut snapshot, &mut form, Event::SubmissionSucceeded);
        assert!(snapshot.succeeded && !snapshot.is_submitting);
        handle_core_event(&mut snapshot, &mut form, Event::SuccessExpired);
        assert!(!snapshot.succeeded);

        let section = handle_core_event(
            &mut snapshot,
            &mut form,
            Event::ScrollRequested {
                section: Section::Projects,
            },
        );
        assert_eq!(section, Some(Section::Projects));
    }

    #[test]
    fn test_form_updated_replaces_values_and_errors() {
        let mut snapshot = UiSnapshot::initial();
        let mut form = FormInput::new();
        let mut errors = FormErrors::default();
        errors.insert(FormField::Name, "Name is required");

        handle_core_event(
            &mut snapshot,
            &mut form,
            Event::FormUpdated {
                data: ContactFormData {
                    email: "a@b.com".to_string(),
                    ..ContactFormData::default()
                },
                errors: errors.clone(),
            },
        );

        assert_eq!(snapshot.form.email, "a@b.com");
        assert_eq!(snapshot.errors, errors);
    }

    #[test]
    fn test_quit_and_page_keys() {
        let snapshot = UiSnapshot::initial();
        let mut form = FormInput::new();
        let (op_tx, mut op_rx) = unbounded_channel();

        assert_eq!(press(KeyCode::Char('q'), &snapshot, &mut form, &op_tx), KeyOutcome::Quit);
        assert_eq!(
            press(KeyCode::Char('j'), &snapshot, &mut form, &op_tx),
            KeyOutcome::Scroll(1)
        );
        assert_eq!(
            press(KeyCode::PageUp, &snapshot, &mut form, &op_tx),
            KeyOutcome::Scroll(-PAGE_LINES)
        );

        press(KeyCode::Char('m'), &snapshot, &mut form, &op_tx);
        press(KeyCode::Char('t'), &snapshot, &mut form, &op_tx);
        press(KeyCode::Char('c'), &snapshot, &mut form, &op_tx);
        press(KeyCode::Char('3'), &snapshot, &mut form, &op_tx);

        assert_eq!(
            drain(&mut op_rx),
            vec![
                Op::ToggleMobileMenu,
                Op::ToggleTheme,
                Op::NavigateTo {
                    section: Section::Contact
                },
                Op::SelectSkill {
                    category: SkillCategory::Tools
                },
            ]
        );
    }

    #[test]
    fn test_overlay_is_modal() {
        let mut snapshot = UiSnapshot::initial();
        snapshot.selected_skill = Some(SkillCategory::Backend);
        let mut form = FormInput::new();
        let (op_tx, mut op_rx) = unbounded_channel();

        assert_eq!(
            press(KeyCode::Char('q'), &snapshot, &mut form, &op_tx),
            KeyOutcome::Handled
        );
        assert_eq!(
            press(KeyCode::Char('t'), &snapshot, &mut form, &op_tx),
            KeyOutcome::Handled
        );
        assert_eq!(drain(&mut op_rx), vec![Op::ClearSkillSelection]);
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut snapshot = UiSnapshot::initial();
        snapshot.mobile_menu_open = true;
        let mut form = FormInput::new();
        let (op_tx, mut op_rx) = unbounded_channel();

        press(KeyCode::Esc, &snapshot, &mut form, &op_tx);
        press(KeyCode::Char('p'), &snapshot, &mut form, &op_tx);

        assert_eq!(
            drain(&mut op_rx),
            vec![
                Op::CloseMobileMenu,
                Op::NavigateTo {
                    section: Section::Projects
                }
            ]
        );
    }

    #[test]
    fn test_form_keys_edit_and_submit() {
        let snapshot = UiSnapshot::initial();
        let mut form = FormInput::new();
        let (op_tx, mut op_rx) = unbounded_channel();

        assert_eq!(
            press(KeyCode::Tab, &snapshot, &mut form, &op_tx),
            KeyOutcome::EnterForm
        );
        form.focus_next();

        // 'q' types instead of quitting while a field has focus.
        assert_eq!(
            press(KeyCode::Char('q'), &snapshot, &mut form, &op_tx),
            KeyOutcome::Handled
        );
        press(KeyCode::Backspace, &snapshot, &mut form, &op_tx);
        press(KeyCode::Enter, &snapshot, &mut form, &op_tx);
        press(KeyCode::Esc, &snapshot, &mut form, &op_tx);
        assert!(!form.is_active());

        assert_eq!(
            drain(&mut op_rx),
            vec![
                Op::EditField {
                    field: FormField::Name,
                    value: "q".to_string()
                },
                Op::EditField {
                    field: FormField::Name,
                    value: String::new()
                },
                Op::Submit,
            ]
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let snapshot = UiSnapshot::initial();
        let mut form = FormInput::new();
        let (op_tx, _op_rx) = unbounded_channel();

        let mut release = KeyEvent::from(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(
            handle_keyboard_event(release, &snapshot, &mut form, &op_tx),
            KeyOutcome::Ignored
        );
    }
}
