use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::connector::CatalogConnector;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::source::HoneyMangaSource;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub source: HoneyMangaSource,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.http)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Wire the context around a custom transport
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        let connector = CatalogConnector::new(config.connector.clone())?;
        let source = HoneyMangaSource::new(connector, fetcher.clone());

        Ok(Self {
            config,
            fetcher,
            source,
        })
    }

    pub fn connector(&self) -> &CatalogConnector {
        self.source.connector()
    }
}
