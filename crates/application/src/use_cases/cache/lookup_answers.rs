use crate::ports::Clock;
use crate::services::{AnswerAuditEvent, AnswerCodec, AuditTrail, StoreHandle};
use spirit_dns_domain::{DomainError, Question, Record};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: replay the cached answers of a question.
///
/// Expired members are filtered out but left in the store for the sweep.
/// Returned records carry their remaining lifetime as TTL.
pub struct LookupAnswersUseCase {
    store: Arc<StoreHandle>,
    clock: Arc<dyn Clock>,
    codec: Arc<AnswerCodec>,
    audit: Option<Arc<AuditTrail>>,
}

impl LookupAnswersUseCase {
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

    #[instrument(skip(self), fields(name = %question.name, qtype = question.qtype))]
    pub async fn execute(&self, question: &Question) -> Result<Vec<Record>, DomainError> {
        let store = self.store.get()?;
        let key = self.codec.encode_key(question)?;
        let now = self.clock.now_secs();

        let members = store.range_by_score(&key, now).await?;
        let records = members
            .iter()
            .map(|m| AnswerCodec::decode_member(&m.member, remaining_ttl(m.score, now)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(hits = records.len(), "Cache lookup");
        if let Some(audit) = &self.audit {
            let action = if records.is_empty() { "miss" } else { "hit" };
            audit.record(AnswerAuditEvent::new(action, question, records.len()));
        }
        Ok(records)
    }
}

/// Whole seconds left until `expires_at`.
pub(crate) fn remaining_ttl(expires_at: f64, now: f64) -> u32 {
    let left = (expires_at - now).floor();
    if left <= 0.0 {
        0
    } else if left >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        left as u32
    }
}
