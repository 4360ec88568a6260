//! Contact form models.
//!
//! This module defines the field values, the per-field error map and the
//! lifecycle phase of the contact form. The rules that fill these in live in
//! `pf-core`; this crate only describes their shape.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Banner message shown when delivery of a valid form fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// An editable field of the contact form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Fields in the order they appear on the page.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Label rendered above the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    /// The field after this one, wrapping around.
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }
}

/// Keys of the error map: one per field plus the submission banner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKey {
    Name,
    Email,
    Message,
    Submit,
}

impl ErrorKey {
    pub fn key(self) -> &'static str {
        match self {
            ErrorKey::Name => "name",
            ErrorKey::Email => "email",
            ErrorKey::Message => "message",
            ErrorKey::Submit => "submit",
        }
    }
}

impl From<FormField> for ErrorKey {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Name => ErrorKey::Name,
            FormField::Email => ErrorKey::Email,
            FormField::Message => ErrorKey::Message,
        }
    }
}

/// Current values of the contact form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// True when all three fields are empty strings.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Error messages currently attached to the form.
///
/// A key is present only while the corresponding field fails validation
/// (or, for `submit`, while the last delivery attempt failed).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct FormErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub submit: Option<String>,
}

impl FormErrors {
    fn slot(&self, key: ErrorKey) -> &Option<String> {
        match key {
            ErrorKey::Name => &self.name,
            ErrorKey::Email => &self.email,
            ErrorKey::Message => &self.message,
            ErrorKey::Submit => &self.submit,
        }
    }

    fn slot_mut(&mut self, key: ErrorKey) -> &mut Option<String> {
        match key {
            ErrorKey::Name => &mut self.name,
            ErrorKey::Email => &mut self.email,
            ErrorKey::Message => &mut self.message,
            ErrorKey::Submit => &mut self.submit,
        }
    }

    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.slot(key.into()).as_deref()
    }

    pub fn contains(&self, key: impl Into<ErrorKey>) -> bool {
        self.slot(key.into()).is_some()
    }

    pub fn insert(&mut self, key: impl Into<ErrorKey>, message: impl Into<String>) {
        *self.slot_mut(key.into()) = Some(message.into());
    }

    /// Remove one entry, returning the message it held.
    pub fn remove(&mut self, key: impl Into<ErrorKey>) -> Option<String> {
        self.slot_mut(key.into()).take()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Present entries in field order, banner last.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        [ErrorKey::Name, ErrorKey::Email, ErrorKey::Message, ErrorKey::Submit]
            .into_iter()
            .filter_map(|key| self.get(key).map(|msg| (key, msg)))
    }
}

/// Lifecycle phase of the contact form.
///
/// ```text
/// Idle -> Invalid | Submitting
/// Submitting -> Succeeded | Failed
/// Succeeded -> Idle (after the success display delay)
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormPhase {
    #[default]
    Idle,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}
