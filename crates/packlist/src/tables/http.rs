//! Fetching and memoization for the published reference sheets. Remote
//! fetches are cached for a bounded window so repeated reprocessing of the
//! same order does not refetch on every operator action.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::TablesConfig;
use crate::error::TableError;

use super::{csv, TableSet};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a reference table comes from: a published-sheet URL or a local
/// CSV file the operator downloaded.
#[derive(Debug, Clone)]
pub enum TableLocation {
    Url(String),
    Path(PathBuf),
}

impl TableLocation {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            TableLocation::Url(source.to_string())
        } else {
            TableLocation::Path(PathBuf::from(source))
        }
    }

    fn display(&self) -> String {
        match self {
            TableLocation::Url(url) => url.clone(),
            TableLocation::Path(path) => path.display().to_string(),
        }
    }
}

/// The three table sources for one deployment.
#[derive(Debug, Clone)]
pub struct TableSources {
    pub prices: TableLocation,
    pub translations: TableLocation,
    pub materials: TableLocation,
}

impl TableSources {
    pub fn from_config(config: &TablesConfig) -> Self {
        Self {
            prices: TableLocation::parse(&config.prices),
            translations: TableLocation::parse(&config.products),
            materials: TableLocation::parse(&config.materials),
        }
    }
}

/// Loads table snapshots. URL bodies are cached with a time-to-live so the
/// core can be re-run freely within one editing session.
pub struct TableProvider {
    client: reqwest::blocking::Client,
    cache: moka::sync::Cache<String, Arc<String>>,
}

impl TableProvider {
    pub fn new(cache_ttl: Duration) -> Result<Self, TableError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| TableError::Fetch {
                location: "<client>".to_string(),
                reason: e.to_string(),
            })?;
        let cache = moka::sync::Cache::builder()
            .max_capacity(16)
            .time_to_live(cache_ttl)
            .build();
        Ok(Self { client, cache })
    }

    pub fn load(&self, sources: &TableSources) -> Result<TableSet, TableError> {
        let _span = tracing::info_span!("tables.load").entered();
        let prices = csv::price_ladder(&self.fetch(&sources.prices)?)?;
        let translations = csv::translation_table(&self.fetch(&sources.translations)?)?;
        let materials = csv::material_table(&self.fetch(&sources.materials)?)?;
        Ok(TableSet {
            prices,
            translations,
            materials,
        })
    }

    fn fetch(&self, location: &TableLocation) -> Result<Arc<String>, TableError> {
        match location {
            TableLocation::Path(path) => std::fs::read_to_string(path)
                .map(Arc::new)
                .map_err(|e| TableError::Fetch {
                    location: location.display(),
                    reason: e.to_string(),
                }),
            TableLocation::Url(url) => {
                if let Some(cached) = self.cache.get(url) {
                    tracing::debug!("table cache hit for {}", url);
                    return Ok(cached);
                }
                let body = self
                    .client
                    .get(url)
                    .send()
                    .and_then(|response| response.error_for_status())
                    .and_then(|response| response.text())
                    .map_err(|e| TableError::Fetch {
                        location: location.display(),
                        reason: e.to_string(),
                    })?;
                let body = Arc::new(body);
                self.cache.insert(url.clone(), body.clone());
                Ok(body)
            }
        }
    }
}
