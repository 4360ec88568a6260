//! TUI widgets module.
//!
//! This module contains the pieces of the portfolio page.

pub mod contact_form;
pub mod document;
pub mod header;
pub mod overlay;
pub mod palette;

pub use contact_form::FormInput;
pub use document::{build_document, Document};
pub use palette::Palette;
