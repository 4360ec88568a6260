//! Global configuration models for `.portfolio/config.toml`.
//!
//! Every table and key is optional; anything left out falls back to the
//! values the page has always used.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// Represents global settings from `.portfolio/config.toml`.
///
/// # Example
///
/// ```toml
/// # .portfolio/config.toml
/// [header]
/// reveal_threshold = 50
///
/// [form]
/// submit_delay_ms = 1000
/// success_display_ms = 3000
///
/// [ui]
/// scroll_step = 10
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Navigation header behaviour.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct HeaderConfig {
    /// Offsets strictly below this always show the header.
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: default_reveal_threshold(),
        }
    }
}

/// Contact form timings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct FormConfig {
    /// Simulated delivery round-trip.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// How long the success message stays up.
    #[serde(default = "default_success_display_ms")]
    pub success_display_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            success_display_ms: default_success_display_ms(),
        }
    }
}

/// Presentation layer tuning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct UiConfig {
    /// Offset units moved per scroll key press or wheel notch.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
        }
    }
}

fn default_reveal_threshold() -> u32 {
    50
}

fn default_submit_delay_ms() -> u64 {
    1000
}

fn default_success_display_ms() -> u64 {
    3000
}

fn default_scroll_step() -> u32 {
    10
}
