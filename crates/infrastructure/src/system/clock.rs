use spirit_dns_application::ports::Clock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock. A system time before the epoch reads as 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
    }
}
