use crate::ports::{CacheSweepOutcome, CacheSweepPort, Clock};
use crate::services::{AnswerCodec, StoreHandle};
use async_trait::async_trait;
use spirit_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: physically delete expired members from every cache key.
///
/// Keys are swept one scan page at a time, so a cycle never holds more than a
/// page of keys. A key returned twice by the scan is swept twice, which is
/// harmless. A failure on one key is logged and counted; the cycle moves on
/// to the next key. Only a failed scan or an uninitialised store aborts the
/// cycle.
pub struct SweepExpiredAnswersUseCase {
    store: Arc<StoreHandle>,
    clock: Arc<dyn Clock>,
    codec: Arc<AnswerCodec>,
    scan_batch_size: usize,
}

impl SweepExpiredAnswersUseCase {
    pub fn new(
        store: Arc<StoreHandle>,
        clock: Arc<dyn Clock>,
        codec: Arc<AnswerCodec>,
        scan_batch_size: usize,
    ) -> Self {
        Self {
            store,
            clock,
            codec,
            scan_batch_size,
        }
    }

    pub async fn execute(&self) -> Result<CacheSweepOutcome, DomainError> {
        let store = self.store.get()?;
        let now = self.clock.now_secs();
        let pattern = self.codec.key_pattern();
        let mut outcome = CacheSweepOutcome::default();
        let mut cursor = 0;

        loop {
            let page = store.scan(cursor, &pattern, self.scan_batch_size).await?;
            for key in &page.keys {
                outcome.keys_scanned += 1;
                match store.remove_range_by_score(key, now).await {
                    Ok(removed) => outcome.members_removed += removed,
                    Err(e) => {
                        warn!(key = %key, error = %e, "Failed to sweep cache key");
                        outcome.failed_keys += 1;
                    }
                }
            }
            if page.cursor == 0 {
                break;
            }
            cursor = page.cursor;
        }

        debug!(
            keys = outcome.keys_scanned,
            removed = outcome.members_removed,
            failed = outcome.failed_keys,
            "Cache sweep cycle finished"
        );
        Ok(outcome)
    }
}

#[async_trait]
impl CacheSweepPort for SweepExpiredAnswersUseCase {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError> {
        self.execute().await
    }
}
