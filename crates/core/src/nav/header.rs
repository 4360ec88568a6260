//! Header visibility controller.
//!
//! Hides the navigation header while the user scrolls down and brings it
//! back as soon as they scroll up. Offsets below the reveal threshold always
//! show the header, so it never disappears near the top of the page.

use tracing::trace;

/// Default reveal threshold, in scroll offset units.
pub const DEFAULT_REVEAL_THRESHOLD: u32 = 50;

/// Visibility state of the navigation header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderVisibility {
    visible: bool,
    last_offset: u32,
    reveal_threshold: u32,
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl HeaderVisibility {
    /// Create a visible header at offset zero.
    pub fn new(reveal_threshold: u32) -> Self {
        Self {
            visible: true,
            last_offset: 0,
            reveal_threshold,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn last_offset(&self) -> u32 {
        self.last_offset
    }

    /// Feed one scroll sample and return the new visibility.
    ///
    /// The result depends only on `offset` and the previous sample; there is
    /// no smoothing or debounce.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        if offset < self.reveal_threshold {
            self.visible = true;
        } else {
            // Equal offsets count as scrolling up.
            self.visible = offset <= self.last_offset;
        }
        self.last_offset = offset;

        trace!(offset, visible = self.visible, "header scroll sample");
        self.visible
    }
}
