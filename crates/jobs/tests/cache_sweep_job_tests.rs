use spirit_dns_application::ports::CacheSweepOutcome;
use spirit_dns_jobs::CacheSweepJob;
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockCacheSweepPort;

#[tokio::test]
async fn test_cache_sweep_job_starts_without_panic() {
    let mock = Arc::new(MockCacheSweepPort::new());
    let job = Arc::new(CacheSweepJob::new(mock));

    job.start().await;

    sleep(Duration::from_millis(10)).await;
}

#[tokio::test]
async fn test_cache_sweep_job_runs_first_cycle_immediately() {
    let mock = Arc::new(MockCacheSweepPort::new());
    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(3600));

    job.start().await;
    sleep(Duration::from_millis(50)).await;

    assert_eq!(mock.sweep_call_count(), 1);
}

#[tokio::test]
async fn test_cache_sweep_job_fires_on_interval() {
    let mock = Arc::new(MockCacheSweepPort::new().with_outcome(CacheSweepOutcome {
        keys_scanned: 3,
        members_removed: 2,
        failed_keys: 0,
    }));
    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(1));

    job.start().await;

    sleep(Duration::from_millis(1100)).await;

    assert!(
        mock.sweep_call_count() >= 2,
        "Sweep should have fired at startup and after one interval"
    );
}

#[tokio::test]
async fn test_cache_sweep_job_error_is_non_fatal() {
    let mock = Arc::new(MockCacheSweepPort::new());
    mock.set_should_fail(true).await;

    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(1));

    job.start().await;

    sleep(Duration::from_millis(2200)).await;

    assert!(
        mock.sweep_call_count() >= 2,
        "Job should continue running after sweep errors"
    );
}

#[tokio::test]
async fn test_cache_sweep_job_shuts_down_on_cancellation() {
    let mock = Arc::new(MockCacheSweepPort::new());
    let token = CancellationToken::new();

    let job = Arc::new(
        CacheSweepJob::new(mock.clone())
            .with_interval(1)
            .with_cancellation(token.clone()),
    );

    let handle = job.start().await;
    sleep(Duration::from_millis(100)).await;
    assert!(mock.sweep_call_count() >= 1, "Should have fired at least once");

    token.cancel();
    timeout(Duration::from_secs(1), handle)
        .await
        .expect("job should stop promptly")
        .unwrap();

    let count_after = mock.sweep_call_count();
    sleep(Duration::from_millis(1100)).await;

    assert_eq!(
        mock.sweep_call_count(),
        count_after,
        "Should not fire after cancellation"
    );
}

#[tokio::test]
async fn test_cache_sweep_job_zero_interval_is_clamped() {
    let mock = Arc::new(MockCacheSweepPort::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        CacheSweepJob::new(mock.clone())
            .with_interval(0)
            .with_cancellation(token.clone()),
    );

    let handle = job.start().await;
    sleep(Duration::from_millis(100)).await;
    token.cancel();
    handle.await.unwrap();

    assert_eq!(mock.sweep_call_count(), 1);
}
