//! # pf-core
//!
//! Interaction core of the portfolio page.
//!
//! This crate provides:
//! - The navigation header controller and the mobile menu
//! - Skill selection and the theme flag
//! - Contact form validation and the submission pipeline
//! - The page runtime that owns all state and drives delivery timers
//! - Settings and content loading from `.portfolio/`
//!
//! ## Modules
//!
//! - [`nav`]: Header visibility and mobile menu
//! - [`selection`]: Selected skill category and theme
//! - [`form`]: Validation and the contact form state machine
//! - [`transport`]: Delivery seam for form submissions
//! - [`page`]: `Page` aggregate and its event loop
//! - [`config`]: Configuration loading
//! - [`init`]: `.portfolio/` scaffolding

pub mod config;
pub mod form;
pub mod init;
pub mod nav;
pub mod page;
pub mod selection;
pub mod transport;
