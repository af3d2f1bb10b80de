use spirit_dns_application::ports::SortedSetStore;
use spirit_dns_application::services::StoreHandle;
use spirit_dns_domain::CacheConfig;
use spirit_dns_infrastructure::store::{InMemorySortedSetStore, RedisSortedSetStore};
use std::sync::Arc;
use tracing::{error, warn};

/// Connects the configured Redis store, or a process-local one when no url
/// is set.
pub async fn connect_store(config: &CacheConfig) -> anyhow::Result<Arc<dyn SortedSetStore>> {
    match &config.url {
        Some(url) => {
            let store = RedisSortedSetStore::connect(url).await.map_err(|e| {
                error!(error = %e, "Failed to connect to cache store");
                anyhow::anyhow!(e)
            })?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("No cache store url configured, answers live only in this process");
            Ok(Arc::new(InMemorySortedSetStore::new()))
        }
    }
}

pub async fn init_store(store: Arc<dyn SortedSetStore>) -> anyhow::Result<Arc<StoreHandle>> {
    let handle = Arc::new(StoreHandle::new());
    handle.init(store).await.map_err(|e| {
        error!(error = %e, "Failed to initialize cache store");
        anyhow::anyhow!(e)
    })?;
    Ok(handle)
}
