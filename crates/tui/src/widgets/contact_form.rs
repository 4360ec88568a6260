//! Contact form input and rendering.
//!
//! `FormInput` tracks which field has focus and composes the edits typed
//! into it. The page runtime stays the owner of the form values: every
//! keystroke becomes an `Op::EditField` carrying the whole new value, and
//! the rendered values come from the latest `UiSnapshot`.

use crate::widgets::palette::Palette;
use pf_protocol::{ContactFormData, ErrorKey, FormField, Op, UiSnapshot};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use std::collections::{HashMap, VecDeque};

const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Focus and local draft of the contact form.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    focus: Option<FormField>,
    draft: ContactFormData,
    /// Values sent per field and not yet echoed back by the core.
    in_flight: HashMap<FormField, VecDeque<String>>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    /// Whether keystrokes go to the form.
    pub fn is_active(&self) -> bool {
        self.focus.is_some()
    }

    /// Enter the form, or move to the next field.
    pub fn focus_next(&mut self) -> FormField {
        let next = self.focus.map_or(FormField::Name, FormField::next);
        self.focus = Some(next);
        next
    }

    pub fn unfocus(&mut self) {
        self.focus = None;
    }

    /// Append a character to the focused field.
    pub fn insert_char(&mut self, c: char) -> Option<Op> {
        self.edit(|value| value.push(c))
    }

    /// Append pasted text to the focused field.
    pub fn insert_str(&mut self, text: &str) -> Option<Op> {
        self.edit(|value| value.push_str(text))
    }

    /// Delete the last character of the focused field.
    pub fn delete_char(&mut self) -> Option<Op> {
        self.edit(|value| {
            value.pop();
        })
    }

    /// Follow the form values reported by the core.
    ///
    /// The core applies edits in the order they were sent, so a reported
    /// value that matches an in-flight edit acknowledges it and every edit
    /// sent before it. A field with nothing left in flight adopts the core's
    /// value; otherwise the local draft is newer and stays.
    pub fn sync(&mut self, data: &ContactFormData) {
        for field in FormField::ALL {
            let value = data.get(field);
            let pending = self.in_flight.entry(field).or_default();
            if let Some(pos) = pending.iter().position(|sent| sent == value) {
                pending.drain(..=pos);
            }
            if pending.is_empty() {
                self.draft.set(field, value.to_string());
            }
        }
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String)) -> Option<Op> {
        let field = self.focus?;
        let mut value = self.draft.get(field).to_string();
        apply(&mut value);
        self.draft.set(field, value.clone());
        self.in_flight
            .entry(field)
            .or_default()
            .push_back(value.clone());
        Some(Op::EditField { field, value })
    }
}

/// Lines of the contact section.
pub fn form_lines(
    snapshot: &UiSnapshot,
    focus: Option<FormField>,
    palette: &Palette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = focus == Some(field);
        let label_style = if focused {
            palette.accent().add_modifier(Modifier::BOLD)
        } else {
            palette.heading()
        };
        lines.push(Line::from(Span::styled(field.label().to_string(), label_style)));

        let value = snapshot.form.get(field);
        let marker = if focused { "> " } else { "  " };
        let value_lines = chunks(value, width.saturating_sub(3).max(1));
        let last = value_lines.len() - 1;
        for (i, text) in value_lines.into_iter().enumerate() {
            let prefix = if i == 0 { marker } else { "  " };
            let cursor = if focused && i == last { "_" } else { "" };
            lines.push(Line::from(format!("{prefix}{text}{cursor}")));
        }

        if let Some(error) = snapshot.errors.get(field) {
            lines.push(Line::from(Span::styled(format!("  {error}"), palette.error())));
        }
        lines.push(Line::default());
    }

    if let Some(error) = snapshot.errors.get(ErrorKey::Submit) {
        lines.push(Line::from(Span::styled(error.to_string(), palette.error())));
    }
    if snapshot.succeeded {
        lines.push(Line::from(Span::styled(SUCCESS_MESSAGE, palette.success())));
    }

    let button = if snapshot.is_submitting {
        Span::styled("[ Sending... ]", palette.muted())
    } else {
        Span::styled(
            "[ Send Message ]",
            palette.accent().add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(button));
    lines.push(Line::from(Span::styled(
        "Tab: next field  Enter: send  Esc: leave form",
        palette.muted(),
    )));

    lines
}

/// Split a field value into rows of `width` characters, keeping spaces.
fn chunks(value: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|row| row.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_protocol::{Theme, SUBMIT_FAILED_MESSAGE};

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut input = FormInput::new();
        assert!(!input.is_active());
        assert_eq!(input.focus_next(), FormField::Name);
        assert_eq!(input.focus_next(), FormField::Email);
        assert_eq!(input.focus_next(), FormField::Message);
        assert_eq!(input.focus_next(), FormField::Name);
        input.unfocus();
        assert!(!input.is_active());
    }

    #[test]
    fn test_typing_sends_whole_value() {
        let mut input = FormInput::new();
        assert_eq!(input.insert_char('x'), None);

        input.focus_next();
        input.insert_char('A');
        let op = input.insert_str("da");
        assert_eq!(
            op,
            Some(Op::EditField {
                field: FormField::Name,
                value: "Ada".to_string()
            })
        );
        assert_eq!(
            input.delete_char(),
            Some(Op::EditField {
                field: FormField::Name,
                value: "Ad".to_string()
            })
        );
    }

    fn name(value: &str) -> ContactFormData {
        ContactFormData {
            name: value.to_string(),
            ..ContactFormData::default()
        }
    }

    fn name_edit(value: &str) -> Option<Op> {
        Some(Op::EditField {
            field: FormField::Name,
            value: value.to_string(),
        })
    }

    #[test]
    fn test_sync_keeps_draft_while_edits_are_in_flight() {
        let mut input = FormInput::new();
        input.focus_next();
        input.insert_str("Ada");

        // Echo of an older state: the local draft is newer.
        input.sync(&name("A"));
        assert_eq!(input.insert_char('!'), name_edit("Ada!"));
    }

    #[test]
    fn test_sync_follows_reset_when_nothing_in_flight() {
        let mut input = FormInput::new();
        input.focus_next();
        input.insert_str("Ada");
        input.sync(&name("Ada"));

        input.sync(&ContactFormData::default());
        assert_eq!(input.insert_char('B'), name_edit("B"));
    }

    #[test]
    fn test_edits_typed_during_reset_survive() {
        let mut input = FormInput::new();
        input.focus_next();
        input.insert_char('A');
        input.insert_char('x');

        // The reset is handled before the two edits reach the core.
        input.sync(&ContactFormData::default());
        input.sync(&name("Ax"));
        assert_eq!(input.insert_char('y'), name_edit("Axy"));
    }

    #[test]
    fn test_sync_adopts_core_values_for_idle_fields() {
        let mut input = FormInput::new();
        input.sync(&ContactFormData {
            email: "ada@example.com".to_string(),
            ..ContactFormData::default()
        });

        input.focus_next();
        input.focus_next();
        assert_eq!(
            input.insert_char('m'),
            Some(Op::EditField {
                field: FormField::Email,
                value: "ada@example.comm".to_string()
            })
        );
    }

    #[test]
    fn test_repeated_values_are_acknowledged_in_order() {
        let mut input = FormInput::new();
        input.focus_next();
        input.insert_char('a');
        input.delete_char();
        input.insert_char('a');

        input.sync(&name("a"));
        input.sync(&name(""));
        // One "a" still in flight: the draft stays.
        assert_eq!(input.draft.name, "a");
        input.sync(&name("a"));
        assert!(input.in_flight[&FormField::Name].is_empty());
        assert_eq!(input.draft.name, "a");
    }

    #[test]
    fn test_chunks_keep_spaces() {
        assert_eq!(chunks("", 4), vec![String::new()]);
        assert_eq!(chunks("ab cd e", 3), vec!["ab ", "cd ", "e"]);
    }

    #[test]
    fn test_form_lines_show_errors_and_status() {
        let palette = Palette::for_theme(Theme::Light);
        let mut snapshot = UiSnapshot::initial();
        snapshot.errors.insert(FormField::Email, "Invalid email address");
        snapshot.errors.insert(ErrorKey::Submit, SUBMIT_FAILED_MESSAGE);

        let rendered = text(&form_lines(&snapshot, Some(FormField::Name), &palette, 40));
        assert!(rendered.contains("Invalid email address"));
        assert!(rendered.contains(SUBMIT_FAILED_MESSAGE));
        assert!(rendered.contains("[ Send Message ]"));
        assert!(rendered.contains("> _"));

        snapshot.is_submitting = true;
        snapshot.succeeded = false;
        let rendered = text(&form_lines(&snapshot, None, &palette, 40));
        assert!(rendered.contains("[ Sending... ]"));

        snapshot.is_submitting = false;
        snapshot.succeeded = true;
        let rendered = text(&form_lines(&snapshot, None, &palette, 40));
        assert!(rendered.contains(SUCCESS_MESSAGE));
    }
}
