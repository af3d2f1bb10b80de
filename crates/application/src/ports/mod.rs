mod audit_log_publisher;
mod cache_sweep_port;
mod clock;
mod sorted_set_store;

pub use audit_log_publisher::AuditLogPublisher;
pub use cache_sweep_port::{CacheSweepOutcome, CacheSweepPort};
pub use clock::Clock;
pub use sorted_set_store::{ScanPage, ScoredMember, SortedSetStore};
