//! Theme flag.
//!
//! The core only owns the boolean. Applying it to the rest of the page is
//! the renderer's job, so toggling hands back an explicit effect instead of
//! touching anything global.

use pf_protocol::{Event, Theme};

/// Current colour scheme. Starts light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    pub fn theme(self) -> Theme {
        self.theme
    }

    /// Flip the theme and return the effect the renderer must apply.
    pub fn toggle(&mut self) -> Event {
        self.theme = self.theme.toggled();
        Event::ThemeChanged { theme: self.theme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_effect() {
        let mut state = ThemeState::default();
        assert_eq!(state.theme(), Theme::Light);

        assert_eq!(state.toggle(), Event::ThemeChanged { theme: Theme::Dark });
        assert_eq!(state.theme(), Theme::Dark);

        assert_eq!(state.toggle(), Event::ThemeChanged { theme: Theme::Light });
    }
}
