//! Spirit DNS Domain Layer
//!
//! Wire codec for DNS messages (header, questions, resource records with
//! name compression), the record type registry, and the configuration and
//! error types shared by the other crates.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod wire;

pub use config::{AuditConfig, CacheConfig, CliOverrides, Config, ConfigError, LoggingConfig};
pub use dns_record::{
    RData, Record, RecordData, RecordHeader, RecordType, A, AAAA, CNAME, MX, NS, PTR, SOA, TXT,
};
pub use errors::{DomainError, WireError};
pub use wire::{CompressionMap, Decoder, Header, Msg, PointerWidth, Question};
