//! Request building and response parsing for the HoneyManga catalogue API.
//!
//! # Flow
//!
//! ```text
//! build_*_request → Fetcher → parse_* → domain records
//! ```
//!
//! The connector never performs I/O itself. Every `*_request` method returns
//! an [`ApiRequest`] and every `parse_*` method takes the raw response body.

pub mod dto;
pub mod request;

pub use request::{ApiRequest, ListingShape, ListingSort};

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use serde_json::json;
use url::Url;

use crate::app::{ConnectorError, Result};
use crate::config::ConnectorConfig;
use crate::domain::{ChapterEntry, ListingPage, MangaDetails, MangaSummary, PageImage};
use dto::{ChapterDto, ChapterPagesDto, MangaDto, MangaListResponse};

const MIN_QUERY_CHARS: usize = 3;
const IMAGE_PATH: &str = "public-resources";

#[derive(Debug, Clone)]
pub struct CatalogConnector {
    config: ConnectorConfig,
    api_url: Url,
    search_api_url: Url,
    storage_url: Url,
    headers: HeaderMap,
}

impl CatalogConnector {
    /// Validate the configured hosts and headers once, up front.
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        let api_url = parse_base(&config.api_url)?;
        let search_api_url = parse_base(&config.search_api_url)?;
        let storage_url = parse_base(&config.storage_url)?;
        if config.page_size == 0 {
            return Err(ConnectorError::Config("page_size must be at least 1".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, header_value(&config.site_url)?);
        headers.insert(REFERER, header_value(&config.site_url)?);
        headers.insert(USER_AGENT, header_value(&config.user_agent)?);

        Ok(Self {
            config,
            api_url,
            search_api_url,
            storage_url,
            headers,
        })
    }

    // ----- derived URLs -----

    /// `<data-api>/manga/<id>`
    pub fn manga_url(&self, manga_id: &str) -> String {
        endpoint(&self.api_url, &["manga", manga_id]).to_string()
    }

    /// `<data-api>/chapter/frames/<id>`
    pub fn chapter_url(&self, chapter_id: &str) -> String {
        endpoint(&self.api_url, &["chapter", "frames", chapter_id]).to_string()
    }

    /// `<storage>/public-resources/<id>`
    pub fn image_url(&self, resource_id: &str) -> String {
        endpoint(&self.storage_url, &[IMAGE_PATH, resource_id]).to_string()
    }

    /// Image URLs are complete once parsed; no second lookup is needed.
    pub fn resolve_page_image_url<'a>(&self, page: &'a PageImage) -> &'a str {
        &page.image_url
    }

    // ----- requests -----

    pub fn popular_request(&self, page: u32) -> ApiRequest {
        self.listing_request(page, ListingSort::Popular)
    }

    pub fn latest_request(&self, page: u32) -> ApiRequest {
        self.listing_request(page, ListingSort::Latest)
    }

    fn listing_request(&self, page: u32, sort: ListingSort) -> ApiRequest {
        let body = json!({
            "page": page,
            "pageSize": self.config.page_size,
            "sort": {
                "sortBy": sort.sort_by(),
                "sortOrder": "DESC",
            },
        });
        let url = endpoint(&self.api_url, &["v2", "manga", "cursor-list"]);
        ApiRequest::post_json(url, self.headers.clone(), body.to_string())
    }

    /// Search is unpaginated upstream; `_page` is accepted for symmetry with
    /// the other listings and ignored.
    pub fn search_request(&self, _page: u32, query: &str) -> Result<ApiRequest> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(ConnectorError::short_query());
        }

        let mut url = endpoint(
            &self.search_api_url,
            &["api", "v1", "title", "search-matching"],
        );
        url.query_pairs_mut().append_pair("query", query);
        Ok(ApiRequest::get(url, self.headers.clone()))
    }

    pub fn chapter_list_request(&self, manga_id: &str) -> ApiRequest {
        let mut url = endpoint(&self.api_url, &["chapter"]);
        url.query_pairs_mut()
            .append_pair("mangaId", manga_id)
            .append_pair("sortOrder", "DESC")
            .append_pair("page", "1")
            .append_pair("pageSize", &self.config.chapter_page_size.to_string());
        ApiRequest::get(url, self.headers.clone())
    }

    /// `details_url` is the URL stored on the summary at listing time.
    pub fn manga_details_request(&self, details_url: &str) -> Result<ApiRequest> {
        let url = Url::parse(details_url)?;
        Ok(ApiRequest::get(url, self.headers.clone()))
    }

    pub fn page_list_request(&self, chapter_id: &str) -> ApiRequest {
        let url = endpoint(&self.api_url, &["chapter", "frames", chapter_id]);
        ApiRequest::get(url, self.headers.clone())
    }

    pub fn image_request(&self, page: &PageImage) -> Result<ApiRequest> {
        let url = Url::parse(self.resolve_page_image_url(page))?;
        Ok(ApiRequest::get(url, self.headers.clone()))
    }

    // ----- parse -----

    pub fn parse_listing(&self, body: &[u8], shape: ListingShape) -> Result<ListingPage<MangaSummary>> {
        let records = match shape {
            ListingShape::Wrapped => serde_json::from_slice::<MangaListResponse>(body)?.data,
            ListingShape::BareArray => serde_json::from_slice::<Vec<MangaDto>>(body)?,
        };
        tracing::debug!("Parsed {} listing records", records.len());

        let items = records.iter().map(|dto| self.summary_from(dto)).collect();
        Ok(ListingPage::from_items(items, self.config.page_size))
    }

    pub fn parse_manga_details(&self, body: &[u8]) -> Result<MangaDetails> {
        let dto: MangaDto = serde_json::from_slice(body)?;
        let summary = self.summary_from(&dto);

        Ok(MangaDetails {
            id: summary.id,
            title: summary.title,
            thumbnail_url: summary.thumbnail_url,
            url: summary.url,
            description: dto.description,
            manga_type: dto.manga_type,
            chapter_count: dto.chapters,
        })
    }

    /// Keeps upstream order (newest first). A chapter with an unreadable
    /// timestamp gets 0 instead of failing the whole list.
    pub fn parse_chapter_list(&self, body: &[u8]) -> Result<Vec<ChapterEntry>> {
        let records: Vec<ChapterDto> = serde_json::from_slice(body)?;

        let chapters = records
            .into_iter()
            .map(|dto| {
                let uploaded_at_millis = self.parse_timestamp(&dto.last_updated).unwrap_or_else(|| {
                    tracing::warn!(
                        "Unparseable timestamp {:?} on chapter {}",
                        dto.last_updated,
                        dto.id
                    );
                    0
                });

                ChapterEntry {
                    display_name: ChapterEntry::format_name(
                        dto.volume,
                        dto.chapter_num,
                        dto.sub_chapter_num,
                    ),
                    url: self.chapter_url(&dto.id),
                    id: dto.id,
                    manga_id: dto.manga_id,
                    volume: dto.volume,
                    chapter_number: dto.chapter_num,
                    sub_chapter_number: dto.sub_chapter_num,
                    uploaded_at_millis,
                }
            })
            .collect();

        Ok(chapters)
    }

    /// Pages come back sorted by index regardless of key order upstream.
    /// Two keys naming the same index (`"0"` and `"00"`) are rejected.
    pub fn parse_page_list(&self, body: &[u8]) -> Result<Vec<PageImage>> {
        let dto: ChapterPagesDto = serde_json::from_slice(body)?;

        let mut pages = BTreeMap::new();
        for (key, value) in &dto.resource_ids {
            let index = key.parse::<usize>().map_err(|_| {
                ConnectorError::ParseFailure(format!(
                    "Invalid page index {:?} in chapter {}",
                    key, dto.id
                ))
            })?;
            let resource_id = primitive_content(value).ok_or_else(|| {
                ConnectorError::ParseFailure(format!(
                    "Invalid resource id for page {} in chapter {}",
                    key, dto.id
                ))
            })?;

            let page = PageImage {
                index,
                image_url: self.image_url(&resource_id),
            };
            if pages.insert(index, page).is_some() {
                return Err(ConnectorError::ParseFailure(format!(
                    "Duplicate page index {} in chapter {}",
                    index, dto.id
                )));
            }
        }

        Ok(pages.into_values().collect())
    }

    fn summary_from(&self, dto: &MangaDto) -> MangaSummary {
        MangaSummary {
            id: dto.id.clone(),
            title: dto.title.clone(),
            thumbnail_url: self.image_url(&dto.poster_id),
            url: self.manga_url(&dto.id),
        }
    }

    fn parse_timestamp(&self, raw: &str) -> Option<i64> {
        NaiveDateTime::parse_from_str(raw, &self.config.date_format)
            .ok()
            .map(|dt| dt.and_utc().timestamp_millis())
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(ConnectorError::Config(format!("Not a base URL: {}", raw)));
    }
    Ok(url)
}

fn header_value(raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw)
        .map_err(|_| ConnectorError::Config(format!("Invalid header value: {}", raw)))
}

fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Bases are checked by `parse_base`, so this always succeeds.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn primitive_content(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
