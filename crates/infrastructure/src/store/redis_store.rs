use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{Client, RedisError};
use spirit_dns_application::ports::{ScanPage, ScoredMember, SortedSetStore};
use spirit_dns_domain::DomainError;
use tracing::{debug, info};

/// Sorted-set store on a Redis server.
///
/// Every call goes through one multiplexed connection that reconnects by
/// itself after the link drops. Scores are passed to Redis as plain floats.
#[derive(Clone)]
pub struct RedisSortedSetStore {
    connection: ConnectionManager,
}

impl RedisSortedSetStore {
    /// Opens the connection described by a `redis://` or `rediss://` url.
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let client = Client::open(url).map_err(|e| store_error("connect", e))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|e| store_error("connect", e))?;

        info!("Connected to Redis cache store");
        Ok(Self { connection })
    }
}

fn store_error(operation: &'static str, e: RedisError) -> DomainError {
    DomainError::store_failed(operation, e)
}

#[async_trait]
impl SortedSetStore for RedisSortedSetStore {
    async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| store_error("ping", e))?;
        Ok(())
    }

    async fn add(&self, key: &str, member: String, score: f64) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();
        let _: i64 = redis::cmd("ZADD")
            .arg(key)
            .arg(score)
            .arg(member)
            .query_async(&mut conn)
            .await
            .map_err(|e| store_error("add", e))?;
        Ok(())
    }

    async fn range_by_score(
        &self,
        key: &str,
        min: f64,
    ) -> Result<Vec<ScoredMember>, DomainError> {
        let mut conn = self.connection.clone();
        let members: Vec<(String, f64)> = redis::cmd("ZRANGEBYSCORE")
            .arg(key)
            .arg(min)
            .arg("+inf")
            .arg("WITHSCORES")
            .query_async(&mut conn)
            .await
            .map_err(|e| store_error("range_by_score", e))?;

        Ok(members
            .into_iter()
            .map(|(member, score)| ScoredMember { member, score })
            .collect())
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<ScanPage, DomainError> {
        let mut conn = self.connection.clone();
        let (cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
            .arg(cursor)
            .arg("MATCH")
            .arg(pattern)
            .arg("COUNT")
            .arg(count.max(1))
            .query_async(&mut conn)
            .await
            .map_err(|e| store_error("scan", e))?;

        debug!(cursor, returned = keys.len(), "Scanned store keys");
        Ok(ScanPage { cursor, keys })
    }

    async fn remove_range_by_score(&self, key: &str, max: f64) -> Result<u64, DomainError> {
        let mut conn = self.connection.clone();
        redis::cmd("ZREMRANGEBYSCORE")
            .arg(key)
            .arg("-inf")
            .arg(max)
            .query_async(&mut conn)
            .await
            .map_err(|e| store_error("remove_range_by_score", e))
    }
}
