pub mod tracing_publisher;

pub use tracing_publisher::TracingAuditPublisher;
