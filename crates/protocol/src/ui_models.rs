//! Presentation-facing state models.
//!
//! `UiSnapshot` is everything a renderer needs to draw the page at one
//! instant. It is produced by the core and never mutated by the renderer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::content_models::SkillCategory;
use crate::form_models::{ContactFormData, FormErrors};

/// Page colour scheme. The page always starts in the light theme.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Page sections reachable from the navigation links.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Profile,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Profile,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Navigation link label.
    pub fn title(self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Rendering snapshot of all interaction state.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct UiSnapshot {
    pub header_visible: bool,
    pub mobile_menu_open: bool,
    pub selected_skill: Option<SkillCategory>,
    pub theme: Theme,
    pub form: ContactFormData,
    pub errors: FormErrors,
    pub is_submitting: bool,
    pub succeeded: bool,
}

impl UiSnapshot {
    /// The state of a freshly mounted page.
    pub fn initial() -> Self {
        Self {
            header_visible: true,
            ..Self::default()
        }
    }
}
