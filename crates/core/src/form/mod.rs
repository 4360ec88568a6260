//! Contact form.
//!
//! This module provides:
//! - Pure validation rules for the three fields
//! - The submission state machine

pub mod pipeline;
pub mod validation;

pub use pipeline::{ContactForm, SubmissionTicket, SubmitAttempt, SubmitOutcome};
pub use validation::validate;
