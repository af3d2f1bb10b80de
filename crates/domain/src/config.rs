pub mod audit;
pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;

pub use audit::AuditConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
