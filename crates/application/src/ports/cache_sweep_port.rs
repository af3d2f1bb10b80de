use async_trait::async_trait;
use spirit_dns_domain::DomainError;

/// Outcome of a sweep cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheSweepOutcome {
    pub keys_scanned: usize,
    pub members_removed: u64,
    pub failed_keys: usize,
}

/// Port for physically removing expired answers from the store.
#[async_trait]
pub trait CacheSweepPort: Send + Sync {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError>;
}
