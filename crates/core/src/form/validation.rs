//! Contact form validation rules.
//!
//! `validate` is a pure function of the form values: it builds a fresh
//! error map on every call and never looks at earlier errors.

use once_cell::sync::Lazy;
use pf_protocol::{ContactFormData, FormErrors, FormField};
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";

/// Minimum message length, counted on the untrimmed value.
pub const MIN_MESSAGE_LEN: usize = 10;

// ASCII-only case folding: `(?-u)` keeps e.g. U+212A KELVIN SIGN from
// matching `K`.
#[allow(clippy::expect_used)]
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email regex")
});

/// Validate all three fields and return every failure found.
///
/// The form is valid iff the returned map is empty.
pub fn validate(data: &ContactFormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.name.trim().is_empty() {
        errors.insert(FormField::Name, NAME_REQUIRED);
    }

    if data.email.trim().is_empty() {
        errors.insert(FormField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&data.email) {
        errors.insert(FormField::Email, EMAIL_INVALID);
    }

    if data.message.trim().is_empty() {
        errors.insert(FormField::Message, MESSAGE_REQUIRED);
    } else if message_len(&data.message) < MIN_MESSAGE_LEN {
        errors.insert(FormField::Message, MESSAGE_TOO_SHORT);
    }

    errors
}

/// Check an address against `local@domain.tld`. The raw value is matched, so
/// surrounding whitespace makes it invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Length in UTF-16 code units, the unit browsers count form input in.
fn message_len(message: &str) -> usize {
    message.encode_utf16().count()
}
