use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    /// Canonical detail endpoint, reused verbatim for details requests
    pub url: String,
}

impl MangaSummary {
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaDetails {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
    pub description: Option<String>,
    pub manga_type: String,
    pub chapter_count: Option<i64>,
}

impl MangaDetails {
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
