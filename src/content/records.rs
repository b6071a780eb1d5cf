//! Record types. Built once from literals; nothing mutates them afterwards.

use serde::Serialize;

/// A file under the site root, with the URL shown when it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    pub path: &'static str,
    pub fallback: &'static str,
}

impl AssetRef {
    pub const fn new(path: &'static str, fallback: &'static str) -> Self {
        Self { path, fallback }
    }
}

/// Label → URL pairs with unique labels, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Links(Vec<(String, String)>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a link. An existing label keeps its position and takes the new URL.
    pub fn insert(&mut self, label: impl Into<String>, url: impl Into<String>) {
        let label = label.into();
        let url = url.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = url,
            None => self.0.push((label, url)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, u)| u.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, u)| (l.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, U: Into<String>> FromIterator<(L, U)> for Links {
    fn from_iter<I: IntoIterator<Item = (L, U)>>(iter: I) -> Self {
        let mut links = Links::new();
        for (label, url) in iter {
            links.insert(label, url);
        }
        links
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub deliverables: Vec<String>,
    pub tools: Vec<String>,
    pub links: Links,
    pub tags: Vec<String>,
    pub image: Option<AssetRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub name: String,
    pub provider: String,
    pub status: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationRecord {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceRecord {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub details: String,
}
