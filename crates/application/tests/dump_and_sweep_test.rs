use spirit_dns_application::ports::CacheSweepPort;
use spirit_dns_domain::{Question, Record, A};
use std::net::Ipv4Addr;
use std::sync::atomic::Ordering;

mod helpers;
use helpers::*;

fn a_answer(name: &str, last_octet: u8, ttl: u32) -> Record {
    Record::new(name, ttl, A::new(Ipv4Addr::new(10, 0, 0, last_octet)))
}

async fn seed(fx: &CacheFixture, names: &[(&str, u32)]) {
    for (i, (name, ttl)) in names.iter().enumerate() {
        fx.store_answers
            .execute(&Question::new(*name, 1), &[a_answer(name, i as u8, *ttl)])
            .await
            .unwrap();
    }
}

// ============================================================================
// Dump
// ============================================================================

#[tokio::test]
async fn test_dump_returns_every_live_question() {
    let fx = CacheFixture::new().await;
    seed(&fx, &[("a.example.", 60), ("b.example.", 60), ("c.example.", 60)]).await;

    let mut dump = fx.dump.execute().await.unwrap();
    dump.sort_by(|x, y| x.question.name.cmp(&y.question.name));

    let names: Vec<&str> = dump.iter().map(|d| d.question.name.as_str()).collect();
    assert_eq!(names, vec!["a.example.", "b.example.", "c.example."]);
    assert!(dump.iter().all(|d| d.records.len() == 1));
}

#[tokio::test]
async fn test_dump_pages_through_the_scan() {
    let fx = CacheFixture::with_store(MockSortedSetStore::new().with_page_size(2)).await;
    seed(
        &fx,
        &[
            ("a.example.", 60),
            ("b.example.", 60),
            ("c.example.", 60),
            ("d.example.", 60),
            ("e.example.", 60),
        ],
    )
    .await;

    let dump = fx.dump.execute().await.unwrap();
    assert_eq!(dump.len(), 5);
    assert_eq!(fx.store.scan_calls.load(Ordering::Relaxed), 3);
    assert_eq!(fx.store.range_calls.load(Ordering::Relaxed), 5);
}

#[tokio::test]
async fn test_dump_skips_fully_expired_questions() {
    let fx = CacheFixture::new().await;
    seed(&fx, &[("short.example.", 5), ("long.example.", 500)]).await;
    fx.clock.advance(30.0);

    let dump = fx.dump.execute().await.unwrap();
    assert_eq!(dump.len(), 1);
    assert_eq!(dump[0].question.name, "long.example.");
    assert_eq!(dump[0].records[0].header.ttl, 470);
}

#[tokio::test]
async fn test_dump_ignores_keys_outside_the_namespace() {
    let fx = CacheFixture::new().await;
    seed(&fx, &[("a.example.", 60)]).await;
    fx.store.insert_raw("session:42", "x", T0 + 100.0).await;

    let dump = fx.dump.execute().await.unwrap();
    assert_eq!(dump.len(), 1);
}

#[tokio::test]
async fn test_dump_of_empty_cache() {
    let fx = CacheFixture::new().await;
    assert!(fx.dump.execute().await.unwrap().is_empty());
}

// ============================================================================
// Sweep
// ============================================================================

#[tokio::test]
async fn test_sweep_removes_only_expired_members() {
    let fx = CacheFixture::new().await;
    seed(
        &fx,
        &[("a.example.", 5), ("b.example.", 5), ("c.example.", 500)],
    )
    .await;
    fx.clock.advance(10.0);

    let outcome = fx.sweep.run_sweep_cycle().await.unwrap();

    assert_eq!(outcome.keys_scanned, 3);
    assert_eq!(outcome.members_removed, 2);
    assert_eq!(outcome.failed_keys, 0);
    assert_eq!(fx.store.total_members().await, 1);

    let live = fx
        .lookup
        .execute(&Question::new("c.example.", 1))
        .await
        .unwrap();
    assert_eq!(live.len(), 1);
}

#[tokio::test]
async fn test_sweep_is_idempotent() {
    let fx = CacheFixture::new().await;
    seed(&fx, &[("a.example.", 5), ("b.example.", 500)]).await;
    fx.clock.advance(10.0);

    let first = fx.sweep.run_sweep_cycle().await.unwrap();
    assert_eq!(first.members_removed, 1);
    let keys_after_first = fx.store.keys().await;

    let second = fx.sweep.run_sweep_cycle().await.unwrap();
    assert_eq!(second.members_removed, 0);
    assert_eq!(second.failed_keys, 0);
    assert_eq!(fx.store.keys().await, keys_after_first);
    assert_eq!(fx.store.total_members().await, 1);
}

#[tokio::test]
async fn test_sweep_continues_past_failing_key() {
    let fx = CacheFixture::new().await;
    seed(
        &fx,
        &[("a.example.", 5), ("b.example.", 5), ("c.example.", 5)],
    )
    .await;
    let failing = fx.codec.encode_key(&Question::new("b.example.", 1)).unwrap();
    fx.store.fail_key(&failing);
    fx.clock.advance(10.0);

    let outcome = fx.sweep.run_sweep_cycle().await.unwrap();

    assert_eq!(outcome.keys_scanned, 3);
    assert_eq!(outcome.failed_keys, 1);
    assert_eq!(outcome.members_removed, 2);
    assert_eq!(fx.store.remove_calls.load(Ordering::Relaxed), 3);
    assert_eq!(fx.store.member_count(&failing).await, 1);
}

#[tokio::test]
async fn test_sweep_deletes_page_by_page() {
    let fx = CacheFixture::with_store(MockSortedSetStore::new().with_page_size(1)).await;
    seed(
        &fx,
        &[("a.example.", 5), ("b.example.", 5), ("c.example.", 5)],
    )
    .await;
    fx.clock.advance(10.0);

    let outcome = fx.sweep.run_sweep_cycle().await.unwrap();

    assert_eq!(outcome.keys_scanned, 3);
    assert_eq!(outcome.members_removed, 3);
    assert_eq!(fx.store.scan_calls.load(Ordering::Relaxed), 3);
    assert!(fx.store.keys().await.is_empty());
}

#[tokio::test]
async fn test_sweep_with_nothing_expired_removes_nothing() {
    let fx = CacheFixture::new().await;
    seed(&fx, &[("a.example.", 60)]).await;

    let outcome = fx.sweep.run_sweep_cycle().await.unwrap();
    assert_eq!(outcome.keys_scanned, 1);
    assert_eq!(outcome.members_removed, 0);
    assert_eq!(fx.store.total_members().await, 1);
}
