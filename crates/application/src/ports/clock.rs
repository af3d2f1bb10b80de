/// Source of the current time used for cache expiry.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now_secs(&self) -> f64;
}
