//! Writes the built-in templates out to `.portfolio/`.

use super::error::{InitError, InitResult};
use crate::config::loader::CONFIG_DIR;
use crate::config::templates::{get_template, list_templates};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for initializing a `.portfolio` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory that will contain `.portfolio/`.
    pub target_dir: PathBuf,

    /// Overwrite an existing `.portfolio` directory.
    pub force: bool,

    /// Write only `config.toml`; content keeps using the built-in defaults.
    pub minimal: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            force: false,
            minimal: false,
        }
    }
}

/// Generate a `.portfolio` directory from the embedded templates.
///
/// ```text
/// .portfolio/
/// ├── config.toml
/// ├── profile.toml        (unless minimal)
/// ├── skills.yaml         (unless minimal)
/// └── projects/*.md       (unless minimal)
/// ```
///
/// Returns the list of written files, relative to `.portfolio/`.
///
/// # Errors
///
/// - The directory already exists and `force` is not set
/// - A template is missing from the binary
/// - File system operations fail
pub async fn generate_portfolio_structure(options: InitOptions) -> InitResult<Vec<String>> {
    let pf_dir = options.target_dir.join(CONFIG_DIR);

    if pf_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(pf_dir));
    }

    fs::create_dir_all(&pf_dir).map_err(|source| InitError::DirectoryCreate {
        path: pf_dir.clone(),
        source,
    })?;

    let mut files = vec!["config.toml".to_string()];
    if !options.minimal {
        files.push("profile.toml".to_string());
        files.push("skills.yaml".to_string());
        files.extend(list_templates("projects/"));
    }

    for file in &files {
        write_template_file(&pf_dir, file)?;
    }

    info!(dir = %pf_dir.display(), count = files.len(), "initialized content directory");
    Ok(files)
}

fn write_template_file(pf_dir: &Path, template_path: &str) -> InitResult<()> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = pf_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::load_config;
    use crate::config::templates::builtin_content;
    use tempfile::tempdir;

    fn options(dir: &Path, force: bool, minimal: bool) -> InitOptions {
        InitOptions {
            target_dir: dir.to_path_buf(),
            force,
            minimal,
        }
    }

    #[tokio::test]
    async fn test_generated_directory_loads_back_to_builtin_content() {
        let dir = tempdir().unwrap();

        let written = generate_portfolio_structure(options(dir.path(), false, false))
            .await
            .unwrap();

        let pf_dir = dir.path().join(CONFIG_DIR);
        for file in &written {
            assert!(pf_dir.join(file).exists(), "{file} should exist");
        }
        assert!(pf_dir.join("projects").is_dir());

        let loaded = load_config(dir.path()).await.unwrap();
        assert_eq!(loaded.content, builtin_content().unwrap());
    }

    #[tokio::test]
    async fn test_minimal_writes_only_settings() {
        let dir = tempdir().unwrap();

        let written = generate_portfolio_structure(options(dir.path(), false, true))
            .await
            .unwrap();

        assert_eq!(written, vec!["config.toml".to_string()]);
        let pf_dir = dir.path().join(CONFIG_DIR);
        assert!(pf_dir.join("config.toml").exists());
        assert!(!pf_dir.join("skills.yaml").exists());
        assert!(!pf_dir.join("projects").exists());
    }

    #[tokio::test]
    async fn test_existing_directory_without_force() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();

        let result = generate_portfolio_structure(options(dir.path(), false, false)).await;
        assert!(matches!(result, Err(InitError::DirectoryExists(_))));
    }

    #[tokio::test]
    async fn test_existing_directory_with_force() {
        let dir = tempdir().unwrap();
        let pf_dir = dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&pf_dir).unwrap();
        fs::write(pf_dir.join("config.toml"), "[header]\nreveal_threshold = 5\n").unwrap();

        generate_portfolio_structure(options(dir.path(), true, true))
            .await
            .unwrap();

        let config = fs::read_to_string(pf_dir.join("config.toml")).unwrap();
        assert!(config.contains("reveal_threshold = 50"));
    }
}
