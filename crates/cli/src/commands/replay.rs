use super::{decode_base64, render::render_record};
use crate::bootstrap;
use crate::di::CacheServices;
use spirit_dns_domain::{Config, Msg};
use spirit_dns_infrastructure::store::InMemorySortedSetStore;
use std::sync::Arc;
use tracing::info;

/// Caches the answers of a base64 response and prints what the cache then
/// serves for every question it holds.
pub async fn replay(config: &Config, input: &str) -> anyhow::Result<()> {
    let response = Msg::unpack(&decode_base64(input)?)?;
    let question = response
        .question
        .first()
        .ok_or_else(|| anyhow::anyhow!("response carries no question"))?;

    // replays never touch the shared store
    let store = bootstrap::init_store(Arc::new(InMemorySortedSetStore::new())).await?;
    let cache = CacheServices::new(config, store);

    let stored = cache
        .store_answers
        .execute(question, &response.answer)
        .await?;
    let served = cache.lookup.execute(question).await?;
    info!(stored, served = served.len(), name = %question.name, "Answers cached");

    for entry in cache.dump.execute().await? {
        println!(";; {} type {}", entry.question.name, entry.question.qtype);
        for record in &entry.records {
            println!("{}", render_record(record));
        }
    }
    Ok(())
}
