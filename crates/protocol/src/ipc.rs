//! Communication protocol between the presentation layer and the core.
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: input events the renderer forwards to the core (scroll samples,
//!   clicks, field edits, submit)
//! - `Event`: state changes and side effects the core reports back
//!
//! Both are delivered over channels and processed one at a time, so every
//! transition runs to completion before the next `Op` is looked at.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::content_models::SkillCategory;
use crate::form_models::{ContactFormData, FormErrors, FormField};
use crate::ui_models::{Section, Theme};

/// Operations sent from the UI to the core.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "editField",
///   "payload": { "field": "email", "value": "a@b.com" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// A new viewport scroll offset was sampled.
    Scroll { offset: u32 },

    /// The mobile menu button was pressed.
    ToggleMobileMenu,

    /// The mobile menu backdrop was clicked.
    CloseMobileMenu,

    /// A skill card was clicked.
    SelectSkill { category: SkillCategory },

    /// The skill overlay's close button or backdrop was clicked.
    ClearSkillSelection,

    /// The theme button was pressed.
    ToggleTheme,

    /// A navigation link was clicked.
    NavigateTo { section: Section },

    /// A form field changed; `value` is the full new content.
    EditField { field: FormField, value: String },

    /// The contact form was submitted.
    Submit,

    /// The page is being torn down. Pending timers are cancelled.
    Shutdown,
}

/// Events sent from the core to the UI.
///
/// ```json
/// {
///   "type": "headerVisibilityChanged",
///   "payload": { "visible": false }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    HeaderVisibilityChanged { visible: bool },

    MobileMenuChanged { open: bool },

    SkillSelectionChanged { selected: Option<SkillCategory> },

    /// The theme flag flipped; the renderer applies it page-wide.
    ThemeChanged { theme: Theme },

    /// The renderer should bring a section into view.
    ScrollRequested { section: Section },

    /// Field values or the error map changed.
    FormUpdated {
        data: ContactFormData,
        errors: FormErrors,
    },

    /// A valid form is being delivered.
    SubmissionStarted,

    /// Delivery succeeded; the form has been cleared.
    SubmissionSucceeded,

    /// Delivery failed; field data was kept.
    SubmissionFailed { message: String },

    /// The success message timed out.
    SuccessExpired,
}
