use super::{scan_all_keys, LookupAnswersUseCase};
use crate::services::{AnswerCodec, StoreHandle};
use spirit_dns_domain::{DomainError, Question, Record};
use std::sync::Arc;
use tracing::{info, instrument};

/// Live answers of one cached question.
#[derive(Debug, Clone)]
pub struct CachedAnswers {
    pub question: Question,
    pub records: Vec<Record>,
}

/// Use case: export every question in the cache with its live answers.
///
/// Costs one store round trip per key on top of the scan. Questions whose
/// members have all expired are left out.
pub struct DumpAnswersUseCase {
    store: Arc<StoreHandle>,
    lookup: Arc<LookupAnswersUseCase>,
    codec: Arc<AnswerCodec>,
    scan_batch_size: usize,
}

impl DumpAnswersUseCase {
    pub fn new(
        store: Arc<StoreHandle>,
        lookup: Arc<LookupAnswersUseCase>,
        codec: Arc<AnswerCodec>,
        scan_batch_size: usize,
    ) -> Self {
        Self {
            store,
            lookup,
            codec,
            scan_batch_size,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<CachedAnswers>, DomainError> {
        let store = self.store.get()?;
        let keys = scan_all_keys(
            &**store,
            &self.codec.key_pattern(),
            self.scan_batch_size,
        )
        .await?;

        let mut dump = Vec::with_capacity(keys.len());
        for key in &keys {
            let question = self.codec.decode_key(key)?;
            let records = self.lookup.execute(&question).await?;
            if !records.is_empty() {
                dump.push(CachedAnswers { question, records });
            }
        }

        info!(keys = keys.len(), questions = dump.len(), "Cache dumped");
        Ok(dump)
    }
}
