pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::connector::ApiRequest;

pub use http_fetcher::HttpFetcher;

/// Executes a built request and hands back the raw response body.
#[async_trait]
pub trait Fetcher {
    async fn execute(&self, request: &ApiRequest) -> Result<Vec<u8>>;
}
