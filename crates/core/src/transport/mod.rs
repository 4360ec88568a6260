//! Contact form delivery.
//!
//! This module provides the `Transport` trait (Adapter Pattern) that hides
//! how a validated form is delivered, plus the simulated and mock adapters.

pub mod base;
pub mod mock;
pub mod simulated;

pub use base::{Transport, TransportError};
pub use mock::MockTransport;
pub use simulated::SimulatedTransport;
