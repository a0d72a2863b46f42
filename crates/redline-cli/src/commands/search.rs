use anyhow::Result;
use redline_client::{HttpBackend, RedactionBackend};
use redline_config::Config;

pub async fn handle(config: &Config, query: &str) -> Result<()> {
    let backend = HttpBackend::new(config.server.clone())?;
    let hits = backend.search(query).await?.into_result()?;

    if hits.is_empty() {
        println!("No matches for '{}'.", query);
        return Ok(());
    }

    println!("Matches ({}):", hits.len());
    for hit in hits {
        println!("  [{}] {}", hit.paragraph, hit.context);
    }

    Ok(())
}
