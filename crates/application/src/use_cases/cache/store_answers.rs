use crate::ports::Clock;
use crate::services::{AnswerAuditEvent, AnswerCodec, AuditTrail, StoreHandle};
use spirit_dns_domain::{DomainError, Question, Record};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: cache the answers resolved for a question.
///
/// Each record becomes its own member scored with its absolute expiry, so
/// records of one answer expire independently. Storing a record that is
/// already cached moves its expiry.
pub struct StoreAnswersUseCase {
    store: Arc<StoreHandle>,
    clock: Arc<dyn Clock>,
    codec: Arc<AnswerCodec>,
    audit: Option<Arc<AuditTrail>>,
}

impl StoreAnswersUseCase {
    pub fn new(store: Arc<StoreHandle>, clock: Arc<dyn Clock>, codec: Arc<AnswerCodec>) -> Self {
        Self {
            store,
            clock,
            codec,
            audit: None,
        }
    }

    pub fn with_audit(mut self, audit: Arc<AuditTrail>) -> Self {
        self.audit = Some(audit);
        self
    }

    #[instrument(skip(self, records), fields(name = %question.name, qtype = question.qtype))]
    pub async fn execute(
        &self,
        question: &Question,
        records: &[Record],
    ) -> Result<usize, DomainError> {
        let store = self.store.get()?;
        let key = self.codec.encode_key(question)?;
        let now = self.clock.now_secs();

        // a record that cannot be encoded must leave the store untouched
        let members = records
            .iter()
            .map(|record| {
                AnswerCodec::encode_member(record)
                    .map(|member| (member, now + f64::from(record.ttl())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (member, expires_at) in members {
            store.add(&key, member, expires_at).await?;
        }

        debug!(stored = records.len(), "Answers cached");
        if let Some(audit) = &self.audit {
            audit.record(AnswerAuditEvent::new("store", question, records.len()));
        }
        Ok(records.len())
    }
}
