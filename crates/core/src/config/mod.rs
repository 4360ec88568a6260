//! Configuration and content loading.
//!
//! Settings and page content come from the `.portfolio/` directory, with the
//! embedded templates as per-file fallback.

pub mod error;
pub mod loader;
pub mod models;
pub mod templates;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_config;
pub use models::AppConfig;
