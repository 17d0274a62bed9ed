//! # HoneyManga
//!
//! A connector for the HoneyManga catalogue API that turns its JSON
//! responses into normalized listing, detail, chapter and page records.
//!
//! ## Architecture
//!
//! ```text
//! Source → Connector (build request) → Fetcher → Connector (parse) → Domain
//! ```
//!
//! - [`connector`]: Request construction and response parsing, no I/O
//! - [`fetcher`]: HTTP transport executing built requests
//! - [`source`]: The host-facing catalogue contract
//!
//! ## Quick Start
//!
//! ```bash
//! # First page of popular titles
//! honeymanga popular
//!
//! # Search (at least 3 characters)
//! honeymanga search "Ван Піс"
//!
//! # Chapters of a title, as JSON
//! honeymanga chapters <manga-id> --json
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// connector, fetcher and source.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/honeymanga/config.toml`.
pub mod config;

/// Request building and response parsing for the catalogue API.
///
/// - [`CatalogConnector`](connector::CatalogConnector): builds requests, parses bodies
/// - [`ApiRequest`](connector::ApiRequest): method, URL, headers and body of one call
pub mod connector;

/// Core domain models.
///
/// - [`MangaSummary`](domain::MangaSummary) / [`MangaDetails`](domain::MangaDetails)
/// - [`ChapterEntry`](domain::ChapterEntry): chapter with display label and upload time
/// - [`PageImage`](domain::PageImage): page index and image URL
/// - [`ListingPage`](domain::ListingPage): one page of results
pub mod domain;

/// HTTP transport.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait executing an [`ApiRequest`](connector::ApiRequest)
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// The catalogue contract consumed by host applications.
pub mod source;
