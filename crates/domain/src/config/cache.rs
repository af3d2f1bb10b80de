use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis url of the sorted-set store; a process-local store is used when
    /// unset.
    #[serde(default)]
    pub url: Option<String>,

    /// Namespace prepended to every cache key in the store.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// COUNT hint passed to each cursor scan.
    #[serde(default = "default_scan_batch_size")]
    pub scan_batch_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: None,
            key_prefix: default_key_prefix(),
            sweep_interval_secs: default_sweep_interval_secs(),
            scan_batch_size: default_scan_batch_size(),
        }
    }
}

fn default_key_prefix() -> String {
    "spirit:answer:".to_string()
}

fn default_sweep_interval_secs() -> u64 {
    60
}

fn default_scan_batch_size() -> usize {
    100
}
