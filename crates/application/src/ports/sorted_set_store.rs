use async_trait::async_trait;
use spirit_dns_domain::DomainError;

/// A member of a sorted collection together with its order key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMember {
    pub member: String,
    pub score: f64,
}

/// One page of a cursor-based key enumeration.
///
/// A `cursor` of 0 means the enumeration is complete. A page may be empty
/// while the cursor is still non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPage {
    pub cursor: u64,
    pub keys: Vec<String>,
}

/// External store holding one sorted collection per key.
///
/// Implementations must make each call atomic at the key level; the cache
/// layer adds no locking of its own.
#[async_trait]
pub trait SortedSetStore: Send + Sync {
    /// Connectivity check.
    async fn ping(&self) -> Result<(), DomainError>;

    /// Adds `member` to the collection at `key`, replacing its score when it
    /// is already present.
    async fn add(&self, key: &str, member: String, score: f64) -> Result<(), DomainError>;

    /// Members whose score is `>= min`, in ascending score order.
    async fn range_by_score(&self, key: &str, min: f64)
        -> Result<Vec<ScoredMember>, DomainError>;

    /// Enumerates keys matching a glob `pattern`, starting at `cursor`
    /// (0 starts a new enumeration). `count` is a batch size hint.
    async fn scan(&self, cursor: u64, pattern: &str, count: usize)
        -> Result<ScanPage, DomainError>;

    /// Removes members whose score is `<= max` and returns how many went.
    async fn remove_range_by_score(&self, key: &str, max: f64) -> Result<u64, DomainError>;
}
