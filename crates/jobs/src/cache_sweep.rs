use spirit_dns_application::ports::CacheSweepPort;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Periodically removes expired answers from the cache store.
///
/// Runs until its cancellation token fires. A failed cycle is logged and the
/// next tick tries again.
pub struct CacheSweepJob {
    sweep: Arc<dyn CacheSweepPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(sweep: Arc<dyn CacheSweepPort>) -> Self {
        Self {
            sweep,
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache sweep background job"
        );
        tokio::spawn(self.run())
    }

    /// The sweep loop itself; returns once cancelled.
    pub async fn run(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheSweepJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.sweep.run_sweep_cycle().await {
                        Ok(outcome) => {
                            if outcome.members_removed > 0 || outcome.failed_keys > 0 {
                                info!(
                                    keys = outcome.keys_scanned,
                                    removed = outcome.members_removed,
                                    failed = outcome.failed_keys,
                                    "Cache sweep cycle completed"
                                );
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Cache sweep cycle failed");
                        }
                    }
                }
            }
        }
    }
}
