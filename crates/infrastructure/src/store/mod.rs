mod glob;
mod memory;
mod redis_store;
mod sorted_set;

pub use glob::glob_match;
pub use memory::{InMemorySortedSetStore, MAX_OPEN_SCANS};
pub use redis_store::RedisSortedSetStore;
