use async_trait::async_trait;
use spirit_dns_application::ports::{CacheSweepOutcome, CacheSweepPort};
use spirit_dns_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockCacheSweepPort {
    sweep_call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
    outcome: Arc<RwLock<CacheSweepOutcome>>,
}

impl MockCacheSweepPort {
    pub fn new() -> Self {
        Self {
            sweep_call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
            outcome: Arc::new(RwLock::new(CacheSweepOutcome::default())),
        }
    }

    pub fn with_outcome(mut self, outcome: CacheSweepOutcome) -> Self {
        self.outcome = Arc::new(RwLock::new(outcome));
        self
    }

    pub fn sweep_call_count(&self) -> u64 {
        self.sweep_call_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl CacheSweepPort for MockCacheSweepPort {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError> {
        self.sweep_call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::store_failed("scan", "mock sweep failure"));
        }
        Ok(self.outcome.read().await.clone())
    }
}
