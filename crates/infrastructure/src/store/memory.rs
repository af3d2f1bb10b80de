use super::glob::glob_match;
use super::sorted_set::SortedSet;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use spirit_dns_application::ports::{ScanPage, ScoredMember, SortedSetStore};
use spirit_dns_domain::DomainError;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};
use tracing::debug;

/// Scans left unfinished beyond this many are forgotten, oldest first;
/// resuming a forgotten cursor fails like an unknown one.
pub const MAX_OPEN_SCANS: usize = 1024;

#[derive(Default)]
struct CursorTable {
    last_id: u64,
    open: BTreeMap<u64, String>,
}

impl CursorTable {
    fn open(&mut self, last_key: String) -> u64 {
        if self.open.len() >= MAX_OPEN_SCANS {
            self.open.pop_first();
        }
        self.last_id += 1;
        self.open.insert(self.last_id, last_key);
        self.last_id
    }
}

/// Process-local sorted-set store.
///
/// Each key is guarded by its map shard, which gives per-key atomicity for
/// every operation. Keys whose last member is removed disappear.
///
/// Scans walk an ordered key index. A non-zero cursor remembers the last key
/// handed out, so keys that exist for the whole scan are returned exactly
/// once even if others come and go in between.
pub struct InMemorySortedSetStore {
    sets: DashMap<String, SortedSet, FxBuildHasher>,
    // only changed while the key's shard is write-locked
    index: RwLock<BTreeSet<String>>,
    cursors: Mutex<CursorTable>,
    available: AtomicBool,
}

impl InMemorySortedSetStore {
    pub fn new() -> Self {
        Self {
            sets: DashMap::with_hasher(FxBuildHasher),
            index: RwLock::new(BTreeSet::new()),
            cursors: Mutex::new(CursorTable::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulates losing or regaining the connection.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    pub fn key_count(&self) -> usize {
        self.sets.len()
    }

    pub fn member_count(&self, key: &str) -> usize {
        self.sets.get(key).map_or(0, |set| set.len())
    }

    pub fn open_scans(&self) -> usize {
        self.cursor_table().open.len()
    }

    fn ensure_available(&self) -> Result<(), DomainError> {
        if self.available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(DomainError::StoreUnavailable)
        }
    }

    fn cursor_table(&self) -> std::sync::MutexGuard<'_, CursorTable> {
        self.cursors.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Up to `count` indexed keys after `after`, and whether more follow.
    fn keys_after(&self, after: Option<&str>, count: usize) -> (Vec<String>, bool) {
        let index = self.index.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys = match after {
            Some(after) => index.range::<str, _>((Bound::Excluded(after), Bound::Unbounded)),
            None => index.range::<str, _>(..),
        };
        let page: Vec<String> = keys.by_ref().take(count).cloned().collect();
        let more = keys.next().is_some();
        (page, more)
    }
}

impl Default for InMemorySortedSetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SortedSetStore for InMemorySortedSetStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.ensure_available()
    }

    async fn add(&self, key: &str, member: String, score: f64) -> Result<(), DomainError> {
        self.ensure_available()?;
        match self.sets.entry(key.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().insert(member, score),
            Entry::Vacant(entry) => {
                self.index
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(key.to_string());
                entry.insert(SortedSet::default()).insert(member, score);
            }
        }
        Ok(())
    }

    async fn range_by_score(
        &self,
        key: &str,
        min: f64,
    ) -> Result<Vec<ScoredMember>, DomainError> {
        self.ensure_available()?;
        Ok(self
            .sets
            .get(key)
            .map(|set| set.range_from(min))
            .unwrap_or_default())
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<ScanPage, DomainError> {
        self.ensure_available()?;

        let after = if cursor == 0 {
            None
        } else {
            let last = self.cursor_table().open.remove(&cursor).ok_or_else(|| {
                DomainError::store_failed("scan", format!("unknown cursor {}", cursor))
            })?;
            Some(last)
        };

        let (examined, more) = self.keys_after(after.as_deref(), count.max(1));
        let cursor = match examined.last() {
            Some(last) if more => self.cursor_table().open(last.clone()),
            _ => 0,
        };
        let keys: Vec<String> = examined
            .into_iter()
            .filter(|key| glob_match(pattern, key))
            .collect();

        debug!(cursor, returned = keys.len(), "Scanned store keys");
        Ok(ScanPage { cursor, keys })
    }

    async fn remove_range_by_score(&self, key: &str, max: f64) -> Result<u64, DomainError> {
        self.ensure_available()?;

        let removed = match self.sets.get_mut(key) {
            Some(mut set) => set.remove_up_to(max),
            None => return Ok(0),
        };
        self.sets.remove_if(key, |key, set| {
            let emptied = set.is_empty();
            if emptied {
                self.index
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(key);
            }
            emptied
        });
        Ok(removed)
    }
}
