use spirit_dns_application::ports::AuditLogPublisher;
use spirit_dns_domain::config::audit::{SPIRIT_DNS_BACKEND_LOG, SPIRIT_DNS_LOG};
use spirit_dns_infrastructure::audit::TracingAuditPublisher;

#[tokio::test]
async fn test_tracing_publisher_accepts_any_payload() {
    let publisher = TracingAuditPublisher;
    assert!(publisher
        .publish(SPIRIT_DNS_BACKEND_LOG, vec![0xFF, 0xFE])
        .await
        .is_ok());
}

#[tokio::test]
async fn test_tracing_publisher_accepts_json_events() {
    let publisher = TracingAuditPublisher;
    let payload = br#"{"action":"store","name":"www.example.com."}"#.to_vec();
    assert!(publisher.publish(SPIRIT_DNS_LOG, payload).await.is_ok());
}
