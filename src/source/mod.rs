//! The contract a host application browses a catalogue through.
//!
//! [`HoneyMangaSource`] fulfils it by pairing a [`CatalogConnector`] with a
//! [`Fetcher`]: build the request, execute it, parse the body.

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::connector::{CatalogConnector, ListingShape};
use crate::domain::{ChapterEntry, ListingPage, MangaDetails, MangaSummary, PageImage};
use crate::fetcher::Fetcher;

#[async_trait]
pub trait Source: Send + Sync {
    fn name(&self) -> &str;

    fn lang(&self) -> &str;

    fn supports_latest(&self) -> bool;

    /// Most liked titles, 1-based `page`
    async fn popular(&self, page: u32) -> Result<ListingPage<MangaSummary>>;

    /// Most recently updated titles, 1-based `page`
    async fn latest(&self, page: u32) -> Result<ListingPage<MangaSummary>>;

    async fn search(&self, page: u32, query: &str) -> Result<ListingPage<MangaSummary>>;

    async fn manga_details(&self, manga: &MangaSummary) -> Result<MangaDetails>;

    /// Chapters newest first
    async fn chapter_list(&self, manga: &MangaSummary) -> Result<Vec<ChapterEntry>>;

    /// Pages ordered by index
    async fn page_list(&self, chapter: &ChapterEntry) -> Result<Vec<PageImage>>;

    fn image_url(&self, page: &PageImage) -> String;
}

pub struct HoneyMangaSource {
    connector: CatalogConnector,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl HoneyMangaSource {
    pub fn new(connector: CatalogConnector, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { connector, fetcher }
    }

    pub fn connector(&self) -> &CatalogConnector {
        &self.connector
    }
}

#[async_trait]
impl Source for HoneyMangaSource {
    fn name(&self) -> &str {
        "HoneyManga"
    }

    fn lang(&self) -> &str {
        "uk"
    }

    fn supports_latest(&self) -> bool {
        true
    }

    async fn popular(&self, page: u32) -> Result<ListingPage<MangaSummary>> {
        let request = self.connector.popular_request(page);
        let body = self.fetcher.execute(&request).await?;
        self.connector.parse_listing(&body, ListingShape::Wrapped)
    }

    async fn latest(&self, page: u32) -> Result<ListingPage<MangaSummary>> {
        let request = self.connector.latest_request(page);
        let body = self.fetcher.execute(&request).await?;
        self.connector.parse_listing(&body, ListingShape::Wrapped)
    }

    async fn search(&self, page: u32, query: &str) -> Result<ListingPage<MangaSummary>> {
        let request = self.connector.search_request(page, query)?;
        let body = self.fetcher.execute(&request).await?;
        self.connector.parse_listing(&body, ListingShape::BareArray)
    }

    async fn manga_details(&self, manga: &MangaSummary) -> Result<MangaDetails> {
        let request = self.connector.manga_details_request(&manga.url)?;
        let body = self.fetcher.execute(&request).await?;
        self.connector.parse_manga_details(&body)
    }

    async fn chapter_list(&self, manga: &MangaSummary) -> Result<Vec<ChapterEntry>> {
        let request = self.connector.chapter_list_request(&manga.id);
        let body = self.fetcher.execute(&request).await?;
        let chapters = self.connector.parse_chapter_list(&body)?;
        tracing::debug!("{} chapters for {}", chapters.len(), manga.id);
        Ok(chapters)
    }

    async fn page_list(&self, chapter: &ChapterEntry) -> Result<Vec<PageImage>> {
        let request = self.connector.page_list_request(&chapter.id);
        let body = self.fetcher.execute(&request).await?;
        self.connector.parse_page_list(&body)
    }

    fn image_url(&self, page: &PageImage) -> String {
        self.connector.resolve_page_image_url(page).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::app::ConnectorError;
    use crate::config::ConnectorConfig;
    use crate::connector::ApiRequest;

    /// Answers requests from canned bodies keyed by URL path and records
    /// every request it sees.
    #[derive(Default)]
    struct CannedFetcher {
        bodies: HashMap<String, String>,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl CannedFetcher {
        fn with(mut self, path: &str, body: &str) -> Self {
            self.bodies.insert(path.to_string(), body.to_string());
            self
        }
    }

    #[async_trait]
    impl Fetcher for CannedFetcher {
        async fn execute(&self, request: &ApiRequest) -> Result<Vec<u8>> {
            self.seen.lock().unwrap().push(request.clone());
            self.bodies
                .get(request.url.path())
                .map(|body| body.clone().into_bytes())
                .ok_or_else(|| ConnectorError::ParseFailure("no canned body".into()))
        }
    }

    fn source(fetcher: CannedFetcher) -> (HoneyMangaSource, Arc<CannedFetcher>) {
        let fetcher = Arc::new(fetcher);
        let connector = CatalogConnector::new(ConnectorConfig::default()).unwrap();
        (HoneyMangaSource::new(connector, fetcher.clone()), fetcher)
    }

    const MANGA: &str = r#"{"id":"m1","posterId":"p1","title":"T","type":"manga","chapters":2,"description":"d"}"#;

    #[test]
    fn test_popular_uses_wrapped_shape() {
        let body = format!(r#"{{"data":[{}]}}"#, MANGA);
        let (source, fetcher) = source(CannedFetcher::default().with("/v2/manga/cursor-list", &body));

        let page = tokio_test::block_on(source.popular(1)).unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_next_page);

        let seen = fetcher.seen.lock().unwrap();
        assert_eq!(seen[0].method, reqwest::Method::POST);
    }

    #[test]
    fn test_search_uses_bare_array_shape() {
        let body = format!("[{}]", MANGA);
        let (source, _) = source(
            CannedFetcher::default().with("/api/v1/title/search-matching", &body),
        );

        let page = tokio_test::block_on(source.search(1, "title")).unwrap();
        assert_eq!(page.items[0].id, "m1");
    }

    #[test]
    fn test_short_search_never_hits_network() {
        let (source, fetcher) = source(CannedFetcher::default());

        let err = tokio_test::block_on(source.search(1, "ab")).unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidQuery(_)));
        assert!(fetcher.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_details_then_chapters_then_pages() {
        let chapters = r#"[{"id":"c1","volume":1,"chapterNum":1,"subChapterNum":0,"mangaId":"m1","lastUpdated":"2024-01-01T00:00:00.000Z"}]"#;
        let pages = r#"{"id":"c1","resourceIds":{"1":"b","0":"a"}}"#;
        let (source, fetcher) = source(
            CannedFetcher::default()
                .with("/manga/m1", MANGA)
                .with("/chapter", chapters)
                .with("/chapter/frames/c1", pages),
        );
        let summary = MangaSummary {
            id: "m1".into(),
            title: "T".into(),
            thumbnail_url: source.connector().image_url("p1"),
            url: source.connector().manga_url("m1"),
        };

        let details = tokio_test::block_on(source.manga_details(&summary)).unwrap();
        assert_eq!(details.chapter_count, Some(2));

        let chapters = tokio_test::block_on(source.chapter_list(&summary)).unwrap();
        assert_eq!(chapters[0].display_name, "Vol. 1 Ch. 1");

        let pages = tokio_test::block_on(source.page_list(&chapters[0])).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].index, 0);
        assert_eq!(source.image_url(&pages[0]), pages[0].image_url);

        let seen = fetcher.seen.lock().unwrap();
        assert_eq!(seen[1].query_param("mangaId").as_deref(), Some("m1"));
    }

    #[test]
    fn test_ids_with_reserved_characters_are_encoded_once() {
        let (source, fetcher) = source(CannedFetcher::default());
        let summary = MangaSummary {
            id: "a/b%c".into(),
            title: "T".into(),
            thumbnail_url: String::new(),
            url: source.connector().manga_url("a/b%c"),
        };
        let chapter = ChapterEntry {
            id: "c/1".into(),
            manga_id: "a/b%c".into(),
            display_name: "Vol. 1 Ch. 1".into(),
            volume: 1,
            chapter_number: 1,
            sub_chapter_number: 0,
            uploaded_at_millis: 0,
            url: source.connector().chapter_url("c/1"),
        };

        // No canned bodies, so both calls fail after the request is recorded
        let _ = tokio_test::block_on(source.chapter_list(&summary));
        let _ = tokio_test::block_on(source.page_list(&chapter));

        let seen = fetcher.seen.lock().unwrap();
        assert_eq!(seen[0].query_param("mangaId").as_deref(), Some("a/b%c"));
        assert_eq!(seen[1].url.path(), "/chapter/frames/c%2F1");
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let (source, _) = source(CannedFetcher::default().with("/v2/manga/cursor-list", "<html>"));

        let err = tokio_test::block_on(source.latest(1)).unwrap_err();
        assert!(matches!(err, ConnectorError::ParseFailure(_)));
    }
}
