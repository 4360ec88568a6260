//! Event handling types for the TUI.

/// Whether a layer of the key handling chain used a key.
///
/// Overlays and the mobile menu sit above the page: a layer that returns
/// `Consumed` stops the key from reaching the layers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Handled here; do not propagate.
    Consumed,
    /// Pass to the next layer.
    NotConsumed,
}
