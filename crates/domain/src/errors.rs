use thiserror::Error;

/// Failures raised while packing or unpacking DNS wire data.
///
/// Every variant is fatal to the current pack/unpack call; no partial
/// message is ever returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("overflow {context}")]
    BufferOverflow { context: &'static str },

    #[error("malformed domain name: {0}")]
    MalformedName(&'static str),

    #[error("bad rdlength: declared {declared} bytes, payload consumed {consumed}")]
    RdlengthMismatch { declared: usize, consumed: usize },

    #[error("unsupported rr type {0}")]
    UnsupportedType(u16),

    #[error("label of {0} bytes exceeds the 63 byte limit")]
    LabelTooLong(usize),

    #[error("domain name of {0} bytes exceeds the 255 byte limit")]
    NameTooLong(usize),

    #[error("character-string of {0} bytes exceeds the 255 byte limit")]
    CharacterStringTooLong(usize),

    #[error("rdata of {0} bytes does not fit a 16-bit rdlength")]
    RdataTooLong(usize),

    #[error("{section} section holds {count} entries, more than a 16-bit count allows")]
    SectionTooLarge { section: &'static str, count: usize },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Wire format error: {0}")]
    Wire(#[from] WireError),

    #[error("Cache store not initialized")]
    StoreUnavailable,

    #[error("Cache store {operation} failed: {reason}")]
    StoreOperationFailed {
        operation: &'static str,
        reason: String,
    },

    #[error("Unsupported record type {0} found in cache")]
    UnsupportedCachedType(u16),

    #[error("Cache encoding error: {0}")]
    CacheEncoding(String),

    #[error("Audit log publish failed: {0}")]
    AuditPublishFailed(String),
}

impl DomainError {
    pub fn store_failed(operation: &'static str, reason: impl ToString) -> Self {
        DomainError::StoreOperationFailed {
            operation,
            reason: reason.to_string(),
        }
    }
}
