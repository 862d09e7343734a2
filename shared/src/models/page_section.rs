//! Editable page section content

use serde::{Deserialize, Serialize};

/// The fixed set of editable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    LandingPage,
    Menu,
    Branches,
    Contact,
}

impl PageKey {
    pub const ALL: [PageKey; 4] = [
        PageKey::LandingPage,
        PageKey::Menu,
        PageKey::Branches,
        PageKey::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::LandingPage => "landing-page",
            PageKey::Menu => "menu",
            PageKey::Branches => "branches",
            PageKey::Contact => "contact",
        }
    }

    /// Parse a path segment; anything outside the fixed set is rejected
    pub fn parse(s: &str) -> Option<PageKey> {
        match s {
            "landing-page" => Some(PageKey::LandingPage),
            "menu" => Some(PageKey::Menu),
            "branches" => Some(PageKey::Branches),
            "contact" => Some(PageKey::Contact),
            _ => None,
        }
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page section content, unique per page key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSection {
    pub page_key: PageKey,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
}

impl PageSection {
    /// Synthesized payload for a known key with no stored content; the
    /// consuming UI always expects a renderable object, never a 404
    pub fn empty(page_key: PageKey) -> Self {
        Self {
            page_key,
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            tags: Vec::new(),
        }
    }
}

/// Upsert payload for a page section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSectionUpsert {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Normalize tags on write: trim, drop blanks, collapse case-insensitive
/// duplicates keeping the first-seen casing and relative order
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        let folded = trimmed.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        out.push(trimmed.to_string());
    }
    out
}
