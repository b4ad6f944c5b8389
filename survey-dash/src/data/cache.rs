//! Process-lifetime dataset cache keyed by source URL.

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
    time::Duration,
};

use chrono::{DateTime, Local};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::{loader::fetch_table, table::Table};

/// Outcome of a load: the table (empty on failure) plus the failure message.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub url: String,
    pub table: Arc<Table>,
    pub error: Option<String>,
    pub loaded_at: DateTime<Local>,
}

impl Dataset {
    fn failed(url: &str, message: String) -> Self {
        Self {
            url: url.to_owned(),
            table: Arc::new(Table::default()),
            error: Some(message),
            loaded_at: Local::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

type CacheMap = Arc<RwLock<HashMap<String, Dataset>>>;
static CACHE: OnceLock<CacheMap> = OnceLock::new();

fn get_cache() -> &'static CacheMap {
    CACHE.get_or_init(|| Arc::new(RwLock::new(HashMap::new())))
}

/// Loads the dataset at `url`, fetching at most once per process.
///
/// Never fails: a failed fetch or parse yields an empty table with the
/// error message attached. Failures are not cached.
#[tracing::instrument(skip(timeout))]
pub async fn load_data(url: &str, timeout: Duration) -> Dataset {
    // Fast path: in-memory cache
    {
        let cache = get_cache().read().await;
        if let Some(hit) = cache.get(url) {
            return hit.clone();
        }
    }

    let mut cache = get_cache().write().await;
    if let Some(hit) = cache.get(url) {
        return hit.clone();
    }

    match fetch_table(url, timeout).await {
        Ok(table) => {
            let dataset = Dataset {
                url: url.to_owned(),
                table: Arc::new(table),
                error: None,
                loaded_at: Local::now(),
            };
            cache.insert(url.to_owned(), dataset.clone());
            dataset
        }
        Err(e) => {
            if e.is_data_source() {
                warn!(url, error = %e, "data source unavailable");
            } else {
                error!(url, error = %e, "dataset load failed");
            }
            Dataset::failed(url, e.to_string())
        }
    }
}

/// Drops the cached dataset so the next load fetches again.
pub async fn invalidate(url: &str) {
    if get_cache().write().await.remove(url).is_some() {
        info!(url, "dataset cache cleared");
    }
}
