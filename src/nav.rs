//! Navigation state: which section the page currently shows.
//!
//! The graph is fully connected. `select` never rejects a section and there
//! is no terminal state; the value lives as long as the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Courses,
    Education,
    Experience,
    Contact,
}

impl SectionId {
    /// Navigation bar order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Courses,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Courses => "courses",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Courses => "Courses",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    /// Section title, HTML-ready. Appears nowhere on the page except in its own section.
    pub fn header(&self) -> &'static str {
        match self {
            Self::Home => "👋 Hi, I'm Sunny Solomon",
            Self::About => "🌙 About Me",
            Self::Projects => "🧩 Projects &amp; Case Studies",
            Self::Skills => "🛠️ Skills &amp; Toolbox",
            Self::Courses => "📚 Courses &amp; Certifications",
            Self::Education => "🎓 Academic Background",
            Self::Experience => "💼 Work Experience",
            Self::Contact => "📫 Get in touch",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Single-session navigation state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: SectionId,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { current: SectionId::Home }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_section(&self) -> SectionId {
        self.current
    }

    /// Overwrite the current section. Returns the section that was showing.
    pub fn select(&mut self, section: SectionId) -> SectionId {
        std::mem::replace(&mut self.current, section)
    }
}
