use crate::bootstrap;
use crate::di::CacheServices;
use spirit_dns_domain::Config;
use spirit_dns_jobs::{CacheSweepJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Starts the answer cache and its sweep job, then waits for Ctrl-C.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let store = bootstrap::connect_store(&config.cache).await?;
    let store = bootstrap::init_store(store).await?;
    let cache = CacheServices::new(config, store);
    let shutdown = CancellationToken::new();

    let sweep_job =
        CacheSweepJob::new(cache.sweep.clone()).with_interval(config.cache.sweep_interval_secs);
    let handles = JobRunner::new()
        .with_cache_sweep(sweep_job)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    info!("Answer cache ready, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    info!("Shutdown requested");
    shutdown.cancel();
    for handle in handles {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    info!("Shutdown complete");
    Ok(())
}
