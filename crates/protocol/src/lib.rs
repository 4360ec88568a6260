//! # pf-protocol
//!
//! Core protocol definitions and data models for portfolio-kit.
//!
//! This crate defines all shared data structures used for:
//! - Static page content (profile, skills, projects)
//! - Contact form values, errors and lifecycle phase
//! - The rendering snapshot and configuration files
//! - Communication between the presentation layer and the core
//!
//! ## Modules
//!
//! - [`content_models`]: Profile, skill and project tables
//! - [`form_models`]: Contact form data and error map
//! - [`ui_models`]: Theme, sections and the rendering snapshot
//! - [`config_models`]: Global configuration from config.toml
//! - [`ipc`]: Operations and Events for UI-Core communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and ts-rs
//! - TypeScript generation: All types derive `TS` for web front-ends
//! - Independent compilation: No dependencies on other portfolio-kit crates

pub mod config_models;
pub mod content_models;
pub mod form_models;
pub mod ipc;
pub mod ui_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use content_models::*;
pub use form_models::*;
pub use ipc::*;
pub use ui_models::*;
