//! Contact form state machine.
//!
//! `ContactForm` owns the field values, the error map and the submission
//! flags. It never waits on anything itself: a submission is split into
//! `begin_submit`, `complete_submit` and `expire_success`, and whoever drives
//! it (the page runtime) performs the delivery and the success timer in
//! between. Each submission carries a ticket so completions that arrive for
//! an older submission are ignored.
//!
//! Errors are added in bulk (every submit re-validates from scratch) and
//! removed one field at a time as the user edits.

use crate::form::validation;
use crate::transport::TransportError;
use pf_protocol::{
    ContactFormData, ErrorKey, FormErrors, FormField, FormPhase, SUBMIT_FAILED_MESSAGE,
};
use tracing::{debug, error, info};

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// What `begin_submit` decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight; nothing changed.
    Busy,
    /// Validation failed; the new error map has been stored.
    Rejected,
    /// The form is valid and now submitting. Deliver `data`, then report
    /// back with `ticket`.
    Started {
        ticket: SubmissionTicket,
        data: ContactFormData,
    },
}

/// Result of a finished delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was cleared and the success message is showing. The driver
    /// should call `expire_success` with the same ticket after the display
    /// delay.
    Succeeded,
    /// Delivery failed; the banner error is set and the data kept.
    Failed { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: ContactFormData,
    errors: FormErrors,
    phase: FormPhase,
    is_submitting: bool,
    succeeded: bool,
    in_flight: Option<SubmissionTicket>,
    showing_success: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Store a new field value and drop that field's error, if any.
    ///
    /// No validation runs here. Returns true if an error entry was removed.
    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        self.data.set(field, value.into());
        self.errors.remove(field).is_some()
    }

    /// Validate the current values without touching any state.
    pub fn validate(&self) -> FormErrors {
        validation::validate(&self.data)
    }

    /// Start a submission.
    ///
    /// Re-validates from scratch. An invalid form replaces the error map
    /// wholesale; a valid one clears it, raises `is_submitting` and hands
    /// back a snapshot of the data to deliver.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting {
            debug!("submit ignored: already submitting");
            return SubmitAttempt::Busy;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.phase = FormPhase::Invalid;
            return SubmitAttempt::Rejected;
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;

        self.errors = FormErrors::default();
        self.is_submitting = true;
        self.succeeded = false;
        self.showing_success = None;
        self.in_flight = Some(ticket);
        self.phase = FormPhase::Submitting;

        info!(ticket = ticket.id(), "contact form submitting");
        SubmitAttempt::Started {
            ticket,
            data: self.data.clone(),
        }
    }

    /// Apply the result of a delivery started by `begin_submit`.
    ///
    /// Returns `None` when `ticket` is not the submission in flight.
    pub fn complete_submit(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), TransportError>,
    ) -> Option<SubmitOutcome> {
        if self.in_flight != Some(ticket) {
            debug!(ticket = ticket.id(), "stale submission result dropped");
            return None;
        }
        self.in_flight = None;
        self.is_submitting = false;

        match result {
            Ok(()) => {
                self.succeeded = true;
                self.showing_success = Some(ticket);
                self.data = ContactFormData::default();
                self.phase = FormPhase::Succeeded;
                info!(ticket = ticket.id(), "contact form delivered");
                Some(SubmitOutcome::Succeeded)
            }
            Err(err) => {
                error!(ticket = ticket.id(), error = %err, "error submitting form");
                self.errors.insert(ErrorKey::Submit, SUBMIT_FAILED_MESSAGE);
                self.phase = FormPhase::Failed;
                Some(SubmitOutcome::Failed {
                    message: SUBMIT_FAILED_MESSAGE.to_string(),
                })
            }
        }
    }

    /// Hide the success message shown for `ticket`.
    ///
    /// Returns false if that success is no longer showing.
    pub fn expire_success(&mut self, ticket: SubmissionTicket) -> bool {
        if self.showing_success != Some(ticket) {
            return false;
        }
        self.showing_success = None;
        self.succeeded = false;
        self.phase = FormPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::{EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_TOO_SHORT, NAME_REQUIRED};

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit_field(FormField::Name, "A");
        form.edit_field(FormField::Email, "a@b.com");
        form.edit_field(FormField::Message, "this is long enough");
        form
    }

    fn start(form: &mut ContactForm) -> SubmissionTicket {
        match form.begin_submit() {
            SubmitAttempt::Started { ticket, .. } => ticket,
            other => panic!("expected Started, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_submit_stores_errors() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), SubmitAttempt::Rejected);

        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(form.errors().len(), 3);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut form = ContactForm::new();
        form.begin_submit();

        assert!(form.edit_field(FormField::Email, "x"));
        assert!(!form.errors().contains(FormField::Email));
        assert_eq!(form.errors().get(FormField::Name), Some(NAME_REQUIRED));
        assert!(form.errors().contains(FormField::Message));
    }

    #[test]
    fn test_edit_does_not_revalidate() {
        let mut form = ContactForm::new();
        form.begin_submit();

        // Still invalid, but the error stays cleared until the next submit.
        form.edit_field(FormField::Email, "not-an-email");
        assert!(!form.errors().contains(FormField::Email));

        form.begin_submit();
        assert_eq!(form.errors().get(FormField::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_edit_is_idempotent() {
        let mut once = ContactForm::new();
        once.begin_submit();
        let mut twice = once.clone();

        once.edit_field(FormField::Name, "x");
        twice.edit_field(FormField::Name, "x");
        twice.edit_field(FormField::Name, "x");

        assert_eq!(once.data(), twice.data());
        assert_eq!(once.errors(), twice.errors());
    }

    #[test]
    fn test_resubmit_replaces_errors_wholesale() {
        let mut form = ContactForm::new();
        form.edit_field(FormField::Message, "short");
        form.begin_submit();
        assert_eq!(form.errors().get(FormField::Message), Some(MESSAGE_TOO_SHORT));

        form.edit_field(FormField::Message, "now this is long enough");
        form.edit_field(FormField::Email, "");
        form.begin_submit();

        assert!(!form.errors().contains(FormField::Message));
        assert_eq!(form.errors().get(FormField::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_successful_submission_lifecycle() {
        let mut form = filled();
        let ticket = start(&mut form);

        assert!(form.is_submitting());
        assert!(!form.succeeded());
        assert_eq!(form.phase(), FormPhase::Submitting);

        assert_eq!(
            form.complete_submit(ticket, Ok(())),
            Some(SubmitOutcome::Succeeded)
        );
        assert!(!form.is_submitting());
        assert!(form.succeeded());
        assert!(form.data().is_empty());

        assert!(form.expire_success(ticket));
        assert!(!form.succeeded());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_failed_submission_keeps_data() {
        let mut form = filled();
        let before = form.data().clone();
        let ticket = start(&mut form);

        let outcome =
            form.complete_submit(ticket, Err(TransportError::Rejected("down".to_string())));

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Failed {
                message: SUBMIT_FAILED_MESSAGE.to_string()
            })
        );
        assert_eq!(form.data(), &before);
        assert_eq!(form.errors().get(ErrorKey::Submit), Some(SUBMIT_FAILED_MESSAGE));
        assert!(!form.is_submitting());
        assert!(!form.succeeded());
        assert_eq!(form.phase(), FormPhase::Failed);
    }

    #[test]
    fn test_submit_while_submitting_is_noop() {
        let mut form = filled();
        let ticket = start(&mut form);

        form.edit_field(FormField::Name, "");
        assert_eq!(form.begin_submit(), SubmitAttempt::Busy);
        assert!(form.errors().is_empty(), "busy submit must not validate");
        assert_eq!(form.complete_submit(ticket, Ok(())), Some(SubmitOutcome::Succeeded));
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut form = filled();
        let ticket = start(&mut form);
        form.complete_submit(ticket, Ok(()));

        assert_eq!(form.complete_submit(ticket, Ok(())), None);
    }

    #[test]
    fn test_new_submission_hides_previous_success() {
        let mut form = filled();
        let first = start(&mut form);
        form.complete_submit(first, Ok(()));
        assert!(form.succeeded());

        form.edit_field(FormField::Name, "B");
        form.edit_field(FormField::Email, "b@c.org");
        form.edit_field(FormField::Message, "another long message");
        let second = start(&mut form);

        assert!(form.is_submitting());
        assert!(!form.succeeded(), "submitting and succeeded are exclusive");

        // The first success timer firing now changes nothing.
        assert!(!form.expire_success(first));
        form.complete_submit(second, Ok(()));
        assert!(!form.expire_success(first));
        assert!(form.succeeded());
        assert!(form.expire_success(second));
    }

    #[test]
    fn test_submit_error_cleared_by_next_valid_submit() {
        let mut form = filled();
        let ticket = start(&mut form);
        form.complete_submit(ticket, Err(TransportError::NotAvailable("offline".to_string())));
        assert!(form.errors().contains(ErrorKey::Submit));

        start(&mut form);
        assert!(form.errors().is_empty());
    }
}
