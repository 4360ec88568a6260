//! Navigation state.
//!
//! This module provides:
//! - The scroll-driven header visibility controller
//! - The mobile menu toggle

pub mod header;
pub mod menu;

pub use header::HeaderVisibility;
pub use menu::MobileMenu;
