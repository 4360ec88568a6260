//! Plain selection stores: the open skill overlay and the theme flag.

pub mod skill;
pub mod theme;

pub use skill::SkillSelection;
pub use theme::ThemeState;
