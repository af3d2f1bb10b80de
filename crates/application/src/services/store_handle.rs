use crate::ports::SortedSetStore;
use spirit_dns_domain::DomainError;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Shared, initialise-once reference to the cache store.
///
/// Every cache operation goes through [`StoreHandle::get`], which fails with
/// [`DomainError::StoreUnavailable`] until [`StoreHandle::init`] succeeded.
#[derive(Default)]
pub struct StoreHandle {
    store: OnceLock<Arc<dyn SortedSetStore>>,
}

impl StoreHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pings `store` and installs it. A second successful init is rejected.
    pub async fn init(&self, store: Arc<dyn SortedSetStore>) -> Result<(), DomainError> {
        store.ping().await?;
        self.store
            .set(store)
            .map_err(|_| DomainError::store_failed("init", "store already initialized"))?;
        info!("Cache store connected");
        Ok(())
    }

    pub fn get(&self) -> Result<&Arc<dyn SortedSetStore>, DomainError> {
        self.store.get().ok_or(DomainError::StoreUnavailable)
    }

    pub fn is_ready(&self) -> bool {
        self.store.get().is_some()
    }
}
