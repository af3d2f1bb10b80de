use async_trait::async_trait;
use spirit_dns_application::ports::{
    AuditLogPublisher, Clock, ScanPage, ScoredMember, SortedSetStore,
};
use spirit_dns_application::services::{AnswerCodec, StoreHandle};
use spirit_dns_application::use_cases::{
    DumpAnswersUseCase, LookupAnswersUseCase, StoreAnswersUseCase, SweepExpiredAnswersUseCase,
};
use spirit_dns_domain::DomainError;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub const KEY_PREFIX: &str = "test:answer:";
pub const T0: f64 = 1_700_000_000.0;

/// Sorted-set store kept in plain maps, with call counters and failure
/// switches.
#[derive(Clone, Default)]
pub struct MockSortedSetStore {
    sets: Arc<RwLock<BTreeMap<String, HashMap<String, f64>>>>,
    page_size: Arc<Mutex<Option<usize>>>,
    /// Last key handed out by each open scan, indexed by cursor - 1.
    scan_cursors: Arc<Mutex<Vec<String>>>,
    ping_fails: Arc<Mutex<bool>>,
    failing_keys: Arc<Mutex<HashSet<String>>>,
    pub add_calls: Arc<AtomicU64>,
    pub range_calls: Arc<AtomicU64>,
    pub scan_calls: Arc<AtomicU64>,
    pub remove_calls: Arc<AtomicU64>,
}

impl MockSortedSetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces scans to return at most `size` keys per page.
    pub fn with_page_size(self, size: usize) -> Self {
        *self.page_size.lock().unwrap() = Some(size);
        self
    }

    pub fn set_ping_fails(&self, fails: bool) {
        *self.ping_fails.lock().unwrap() = fails;
    }

    /// Makes range deletes on `key` fail.
    pub fn fail_key(&self, key: &str) {
        self.failing_keys.lock().unwrap().insert(key.to_string());
    }

    pub async fn insert_raw(&self, key: &str, member: &str, score: f64) {
        self.sets
            .write()
            .await
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string(), score);
    }

    pub async fn member_count(&self, key: &str) -> usize {
        self.sets.read().await.get(key).map_or(0, HashMap::len)
    }

    pub async fn total_members(&self) -> usize {
        self.sets.read().await.values().map(HashMap::len).sum()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.sets.read().await.keys().cloned().collect()
    }
}

fn glob_prefix(pattern: &str) -> &str {
    pattern.strip_suffix('*').unwrap_or(pattern)
}

#[async_trait]
impl SortedSetStore for MockSortedSetStore {
    async fn ping(&self) -> Result<(), DomainError> {
        if *self.ping_fails.lock().unwrap() {
            return Err(DomainError::store_failed("ping", "connection refused"));
        }
        Ok(())
    }

    async fn add(&self, key: &str, member: String, score: f64) -> Result<(), DomainError> {
        self.add_calls.fetch_add(1, Ordering::Relaxed);
        self.sets
            .write()
            .await
            .entry(key.to_string())
            .or_default()
            .insert(member, score);
        Ok(())
    }

    async fn range_by_score(
        &self,
        key: &str,
        min: f64,
    ) -> Result<Vec<ScoredMember>, DomainError> {
        self.range_calls.fetch_add(1, Ordering::Relaxed);
        let sets = self.sets.read().await;
        let mut members: Vec<ScoredMember> = sets
            .get(key)
            .into_iter()
            .flatten()
            .filter(|(_, score)| **score >= min)
            .map(|(member, score)| ScoredMember {
                member: member.clone(),
                score: *score,
            })
            .collect();
        members.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(members)
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<ScanPage, DomainError> {
        self.scan_calls.fetch_add(1, Ordering::Relaxed);
        let page_size = self.page_size.lock().unwrap().unwrap_or(count).max(1);
        let prefix = glob_prefix(pattern);

        let after = match cursor {
            0 => None,
            c => self.scan_cursors.lock().unwrap().get(c as usize - 1).cloned(),
        };

        let sets = self.sets.read().await;
        let mut remaining = sets
            .keys()
            .filter(|k| k.starts_with(prefix))
            .filter(|k| after.as_deref().map_or(true, |after| k.as_str() > after));
        let keys: Vec<String> = remaining.by_ref().take(page_size).cloned().collect();

        let cursor = match keys.last() {
            Some(last) if remaining.next().is_some() => {
                let mut cursors = self.scan_cursors.lock().unwrap();
                cursors.push(last.clone());
                cursors.len() as u64
            }
            _ => 0,
        };
        Ok(ScanPage { cursor, keys })
    }

    async fn remove_range_by_score(&self, key: &str, max: f64) -> Result<u64, DomainError> {
        self.remove_calls.fetch_add(1, Ordering::Relaxed);
        if self.failing_keys.lock().unwrap().contains(key) {
            return Err(DomainError::store_failed("remove_range_by_score", "timeout"));
        }

        let mut sets = self.sets.write().await;
        let Some(members) = sets.get_mut(key) else {
            return Ok(0);
        };
        let before = members.len();
        members.retain(|_, score| *score > max);
        let removed = (before - members.len()) as u64;
        if members.is_empty() {
            sets.remove(key);
        }
        Ok(removed)
    }
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<f64>>,
}

impl ManualClock {
    pub fn at(now: f64) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: f64) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, secs: f64) {
        *self.now.lock().unwrap() += secs;
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        *self.now.lock().unwrap()
    }
}

#[derive(Clone, Default)]
pub struct MockAuditPublisher {
    published: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    should_fail: Arc<Mutex<bool>>,
    pub publish_calls: Arc<AtomicU64>,
}

impl MockAuditPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn published(&self) -> Vec<(String, Vec<u8>)> {
        self.published.lock().unwrap().clone()
    }

    /// Yields until `count` publishes happened or gives up.
    pub async fn wait_for(&self, count: u64) {
        for _ in 0..100 {
            if self.publish_calls.load(Ordering::SeqCst) >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl AuditLogPublisher for MockAuditPublisher {
    async fn publish(&self, destination: &str, payload: Vec<u8>) -> Result<(), DomainError> {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::AuditPublishFailed("broker down".to_string()));
        }
        self.published
            .lock()
            .unwrap()
            .push((destination.to_string(), payload));
        Ok(())
    }
}

/// All cache use cases wired against one mock store and one manual clock.
pub struct CacheFixture {
    pub store: MockSortedSetStore,
    pub clock: ManualClock,
    pub handle: Arc<StoreHandle>,
    pub codec: Arc<AnswerCodec>,
    pub store_answers: StoreAnswersUseCase,
    pub lookup: Arc<LookupAnswersUseCase>,
    pub dump: DumpAnswersUseCase,
    pub sweep: SweepExpiredAnswersUseCase,
}

impl CacheFixture {
    pub async fn new() -> Self {
        Self::with_store(MockSortedSetStore::new()).await
    }

    pub async fn with_store(store: MockSortedSetStore) -> Self {
        let fixture = Self::uninitialized(store);
        fixture
            .handle
            .init(Arc::new(fixture.store.clone()))
            .await
            .unwrap();
        fixture
    }

    pub fn uninitialized(store: MockSortedSetStore) -> Self {
        let clock = ManualClock::at(T0);
        let handle = Arc::new(StoreHandle::new());
        let codec = Arc::new(AnswerCodec::new(KEY_PREFIX));
        let clock_port: Arc<dyn Clock> = Arc::new(clock.clone());

        let lookup = Arc::new(LookupAnswersUseCase::new(
            handle.clone(),
            clock_port.clone(),
            codec.clone(),
        ));
        Self {
            store_answers: StoreAnswersUseCase::new(
                handle.clone(),
                clock_port.clone(),
                codec.clone(),
            ),
            dump: DumpAnswersUseCase::new(handle.clone(), lookup.clone(), codec.clone(), 10),
            sweep: SweepExpiredAnswersUseCase::new(
                handle.clone(),
                clock_port,
                codec.clone(),
                10,
            ),
            lookup,
            store,
            clock,
            handle,
            codec,
        }
    }
}
