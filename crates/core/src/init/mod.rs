//! Initialization of a `.portfolio/` content directory.
//!
//! Copies the embedded templates to disk so the page content can be edited:
//! - Global settings (`config.toml`)
//! - Profile, skills and project cards
//!
//! # Example
//!
//! ```no_run
//! use pf_core::init::{generate_portfolio_structure, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//!     minimal: false,
//! };
//!
//! generate_portfolio_structure(options).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;

pub use error::{InitError, InitResult};
pub use generator::{generate_portfolio_structure, InitOptions};
