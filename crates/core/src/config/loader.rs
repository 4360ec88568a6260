//! Configuration file loader for the `.portfolio/` directory structure.
//!
//! This module provides functionality to load and parse all configuration files
//! from the `.portfolio/` directory, including:
//! - `config.toml`: Global settings
//! - `profile.toml`: Profile header
//! - `skills.yaml`: Skill categories
//! - `projects/*.md`: Project cards with YAML front matter
//!
//! Every file is optional. Anything missing falls back to the built-in
//! template of the same name.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use crate::config::templates::{builtin_path, list_templates, require_template};
use gray_matter::engine::YAML;
use gray_matter::Matter;
use pf_protocol::config_models::GlobalConfig;
use pf_protocol::content_models::{PortfolioContent, Profile, Project, SkillProfile};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Name of the configuration directory under the project root.
pub const CONFIG_DIR: &str = ".portfolio";

/// Loads all configuration from the `.portfolio/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.portfolio/` folder
///
/// # Returns
///
/// An `AppConfig` with every missing file replaced by its built-in default.
/// A missing `.portfolio/` directory yields the fully built-in configuration.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid syntax (TOML, YAML, or Markdown front matter)
/// - Skill categories are listed more than once
///
/// # Example
///
/// ```rust,no_run
/// use pf_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Header threshold: {}", config.global.header.reveal_threshold);
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let pf_dir = root.join(CONFIG_DIR);

    // If .portfolio doesn't exist, return the built-in config
    if !pf_dir.exists() {
        debug!(dir = %pf_dir.display(), "no config directory; using built-in content");
        return AppConfig::builtin();
    }

    let global = load_global_config(&pf_dir)?;

    let content = PortfolioContent {
        profile: load_profile(&pf_dir)?,
        skills: load_skills(&pf_dir)?,
        projects: load_projects(&pf_dir)?,
    };

    Ok(AppConfig { global, content })
}

fn read_file(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(pf_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = pf_dir.join("config.toml");

    // If config.toml doesn't exist, return default
    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content = read_file(&config_path)?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path,
        source,
    })
}

fn load_profile(pf_dir: &Path) -> ConfigResult<Profile> {
    let path = pf_dir.join("profile.toml");
    if !path.exists() {
        return builtin_profile();
    }
    parse_profile(&read_file(&path)?, &path)
}

fn load_skills(pf_dir: &Path) -> ConfigResult<Vec<SkillProfile>> {
    let path = pf_dir.join("skills.yaml");
    if !path.exists() {
        return builtin_skills();
    }
    parse_skills(&read_file(&path)?, &path)
}

/// Loads all project cards from `projects/*.md`, ordered by file name.
fn load_projects(pf_dir: &Path) -> ConfigResult<Vec<Project>> {
    let projects_dir = pf_dir.join("projects");

    if !projects_dir.exists() {
        return builtin_projects();
    }

    let mut projects = Vec::new();

    for entry in WalkDir::new(&projects_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: projects_dir.clone(),
            source,
        })?;

        let path = entry.path();

        // Only process .md files
        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }

        projects.push(parse_project(&read_file(path)?, path)?);
    }

    Ok(projects)
}

pub(crate) fn builtin_profile() -> ConfigResult<Profile> {
    parse_profile(&require_template("profile.toml")?, &builtin_path("profile.toml"))
}

pub(crate) fn builtin_skills() -> ConfigResult<Vec<SkillProfile>> {
    parse_skills(&require_template("skills.yaml")?, &builtin_path("skills.yaml"))
}

pub(crate) fn builtin_projects() -> ConfigResult<Vec<Project>> {
    list_templates("projects/")
        .iter()
        .filter(|name| name.ends_with(".md"))
        .map(|name| parse_project(&require_template(name)?, &builtin_path(name)))
        .collect()
}

fn parse_profile(content: &str, path: &Path) -> ConfigResult<Profile> {
    toml::from_str(content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_skills(content: &str, path: &Path) -> ConfigResult<Vec<SkillProfile>> {
    let skills: Vec<SkillProfile> =
        serde_yaml::from_str(content).map_err(|source| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    for skill in &skills {
        if !seen.insert(skill.category) {
            return Err(ConfigError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("skill category `{}` is listed more than once", skill.category),
            });
        }
    }

    Ok(skills)
}

/// Parse one project card: front matter for the fields, body for the description.
fn parse_project(content: &str, path: &Path) -> ConfigResult<Project> {
    let matter = Matter::<YAML>::new();
    let result = matter.parse(content);

    let mut project: Project = result
        .data
        .ok_or_else(|| ConfigError::MarkdownParse {
            path: path.to_path_buf(),
            reason: "Missing YAML front matter".to_string(),
        })?
        .deserialize()
        .map_err(|e| ConfigError::MarkdownParse {
            path: path.to_path_buf(),
            reason: format!("Failed to deserialize front matter: {e}"),
        })?;

    project.description = result.content.trim().to_string();

    Ok(project)
}
