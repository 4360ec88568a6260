//! Built-in page content and settings.
//!
//! This module uses `rust-embed` to embed the workspace `templates/`
//! directory into the binary at compile time. The same files are the
//! fallback for anything missing from `.portfolio/` and the source that
//! `portfolio init` copies out.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::loader;
use pf_protocol::PortfolioContent;
use rust_embed::RustEmbed;
use std::path::PathBuf;

/// Embedded template files from the `templates/` directory.
///
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = workspace root `templates/`
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path, e.g. `"skills.yaml"`.
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List all template files under `prefix`, sorted by path.
pub fn list_templates(prefix: &str) -> Vec<String> {
    let mut paths: Vec<String> = TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect();
    paths.sort();
    paths
}

/// Pseudo path used in error messages for embedded files.
pub(crate) fn builtin_path(path: &str) -> PathBuf {
    PathBuf::from("<builtin>").join(path)
}

pub(crate) fn require_template(path: &str) -> ConfigResult<String> {
    get_template(path).ok_or_else(|| ConfigError::TemplateNotFound(path.to_string()))
}

/// Parse the built-in profile, skills and projects.
pub fn builtin_content() -> ConfigResult<PortfolioContent> {
    Ok(PortfolioContent {
        profile: loader::builtin_profile()?,
        skills: loader::builtin_skills()?,
        projects: loader::builtin_projects()?,
    })
}
