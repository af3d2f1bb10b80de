use crate::ports::AuditLogPublisher;
use serde::Serialize;
use spirit_dns_domain::Question;
use std::sync::Arc;
use tracing::warn;

/// One audit entry describing a cache interaction.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerAuditEvent {
    pub action: &'static str,
    pub name: String,
    pub qtype: u16,
    pub records: usize,
    pub timestamp: String,
}

impl AnswerAuditEvent {
    pub fn new(action: &'static str, question: &Question, records: usize) -> Self {
        Self {
            action,
            name: question.name.clone(),
            qtype: question.qtype,
            records,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Fire-and-forget audit publishing.
///
/// Publishing happens on a spawned task; failures are logged and never reach
/// the cache operation that produced the event.
pub struct AuditTrail {
    publisher: Arc<dyn AuditLogPublisher>,
    destination: String,
}

impl AuditTrail {
    pub fn new(publisher: Arc<dyn AuditLogPublisher>, destination: impl Into<String>) -> Self {
        Self {
            publisher,
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn record(&self, event: AnswerAuditEvent) {
        let payload = match serde_json::to_vec(&event) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, action = event.action, "Failed to serialize audit event");
                return;
            }
        };

        let publisher = Arc::clone(&self.publisher);
        let destination = self.destination.clone();
        tokio::spawn(async move {
            if let Err(e) = publisher.publish(&destination, payload).await {
                warn!(error = %e, destination = %destination, "Audit log publish failed");
            }
        });
    }
}
