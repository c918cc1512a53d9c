use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classify::CollectionMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    pub tables: TablesConfig,
    /// Optional per-category replacement of the built-in collection-recode
    /// pairs, keyed by category code. Pair order is significant.
    #[serde(default)]
    pub collections: Option<HashMap<String, Vec<(String, String)>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesConfig {
    /// Price ladder source: a published-sheet CSV URL or a local file.
    pub prices: String,
    /// Product-translation table source.
    pub products: String,
    /// Material-translation table source.
    pub materials: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    600
}

impl Config {
    pub fn collection_map(&self) -> CollectionMap {
        match &self.collections {
            Some(overrides) => CollectionMap::with_overrides(overrides),
            None => CollectionMap::default(),
        }
    }
}
