//! Selected skill category for the detail overlay.

use pf_protocol::SkillCategory;

/// Which skill category's overlay is open, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillSelection {
    selected: Option<SkillCategory>,
}

impl SkillSelection {
    pub fn selected(self) -> Option<SkillCategory> {
        self.selected
    }

    /// A category card was clicked. Returns true if the selection changed.
    pub fn select(&mut self, category: SkillCategory) -> bool {
        self.replace(Some(category))
    }

    /// Close button or backdrop clicked. Returns true if an overlay was open.
    pub fn clear(&mut self) -> bool {
        self.replace(None)
    }

    fn replace(&mut self, next: Option<SkillCategory>) -> bool {
        let changed = self.selected != next;
        self.selected = next;
        changed
    }
}
