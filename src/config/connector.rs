use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const DEFAULT_CHAPTER_PAGE_SIZE: usize = 1000;
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Upstream hosts and request constants for the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Primary data API
    pub api_url: String,

    /// Search API, a separate host from the data API
    pub search_api_url: String,

    /// Object storage host serving posters and page images
    pub storage_url: String,

    /// Front-end origin, sent as `Origin` and `Referer`
    pub site_url: String,

    pub user_agent: String,

    /// Items per listing page (default: 30)
    pub page_size: usize,

    /// Chapters requested in one go (default: 1000). Titles with more
    /// chapters are truncated.
    pub chapter_page_size: usize,

    /// chrono format of upstream timestamps
    pub date_format: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://data.api.honey-manga.com.ua".to_string(),
            search_api_url: "https://search.api.honey-manga.com.ua".to_string(),
            storage_url: "https://manga-storage.fra1.digitaloceanspaces.com".to_string(),
            site_url: "https://honey-manga.com.ua".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            chapter_page_size: DEFAULT_CHAPTER_PAGE_SIZE,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
