pub mod dump_answers;
pub mod lookup_answers;
pub mod store_answers;
pub mod sweep_expired;

pub use dump_answers::{CachedAnswers, DumpAnswersUseCase};
pub use lookup_answers::LookupAnswersUseCase;
pub use store_answers::StoreAnswersUseCase;
pub use sweep_expired::SweepExpiredAnswersUseCase;

use crate::ports::SortedSetStore;
use rustc_hash::FxHashSet;
use spirit_dns_domain::DomainError;

/// Walks a full scan of `pattern`, dropping the duplicates a cursor scan may
/// return.
pub(crate) async fn scan_all_keys(
    store: &dyn SortedSetStore,
    pattern: &str,
    batch_size: usize,
) -> Result<Vec<String>, DomainError> {
    let mut seen = FxHashSet::default();
    let mut keys = Vec::new();
    let mut cursor = 0;

    loop {
        let page = store.scan(cursor, pattern, batch_size).await?;
        for key in page.keys {
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }
        if page.cursor == 0 {
            break;
        }
        cursor = page.cursor;
    }

    Ok(keys)
}
