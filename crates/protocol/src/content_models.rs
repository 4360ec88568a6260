//! Static content models for the portfolio page.
//!
//! These are the read-only tables the page renders: the profile header,
//! the skill categories and the project list. The core only selects from
//! them by key; it never validates or transforms their content.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// One of the fixed skill categories shown in the skills grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TS)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Databases,
}

impl SkillCategory {
    /// All categories in display order.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Databases,
    ];

    /// The lowercase key used in content files and click targets.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tools => "tools",
            SkillCategory::Databases => "databases",
        }
    }

    /// Card heading.
    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
            SkillCategory::Databases => "Databases",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The profile block at the top of the page.
///
/// # Example
///
/// ```toml
/// # .portfolio/profile.toml
/// name = "Enoh Uwem Akpan"
/// headline = "Frontend Web Developer"
/// bio = "Passionate about creating beautiful and functional web applications."
/// avatar = "/images/profile/ENOH.jpg"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub bio: String,
    /// Media reference for the profile picture.
    #[serde(default)]
    pub avatar: String,
}

/// A project mentioned inside a skill category's detail overlay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ProjectRef {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub repo: String,
}

/// A skill category with its skill list, blurb and related projects.
///
/// # Example
///
/// ```yaml
/// - category: tools
///   skills: [Git, VS Code, Figma, Postman]
///   description: Proficient in development tools.
///   projects: []
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct SkillProfile {
    pub category: SkillCategory,
    pub skills: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
}

/// A portfolio project card.
///
/// Projects are defined in `.portfolio/projects/*.md` files: the YAML front
/// matter holds every field except `description`, which is the file body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Project {
    pub title: String,

    /// Taken from the Markdown body, not the front matter.
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: String,

    pub repo: String,

    /// Link to a live demo, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub live: Option<String>,

    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Everything the page renders that is not interaction state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: Vec<SkillProfile>,
    pub projects: Vec<Project>,
}

impl PortfolioContent {
    /// Look up the detail record for a skill category.
    pub fn skill(&self, category: SkillCategory) -> Option<&SkillProfile> {
        self.skills.iter().find(|s| s.category == category)
    }
}
