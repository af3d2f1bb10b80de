use async_trait::async_trait;
use spirit_dns_domain::DomainError;

/// Port for shipping audit log payloads to a named destination.
#[async_trait]
pub trait AuditLogPublisher: Send + Sync {
    async fn publish(&self, destination: &str, payload: Vec<u8>) -> Result<(), DomainError>;
}
