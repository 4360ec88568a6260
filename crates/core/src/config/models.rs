//! Configuration models that aggregate all settings.
//!
//! This module provides the unified `AppConfig` structure that combines
//! global settings and page content into a single configuration object.

use crate::config::error::ConfigResult;
use crate::config::templates::builtin_content;
use pf_protocol::config_models::GlobalConfig;
use pf_protocol::content_models::PortfolioContent;

/// Unified application configuration loaded from `.portfolio/`.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Global settings
/// - `profile.toml`: Profile header
/// - `skills.yaml`: Skill categories
/// - `projects/*.md`: Project cards
///
/// # Example
///
/// ```rust,no_run
/// use pf_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} skills and {} projects",
///          config.content.skills.len(),
///          config.content.projects.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// Everything the page renders.
    pub content: PortfolioContent,
}

impl AppConfig {
    /// Default settings with the built-in content.
    pub fn builtin() -> ConfigResult<Self> {
        Ok(Self {
            global: GlobalConfig::default(),
            content: builtin_content()?,
        })
    }
}
