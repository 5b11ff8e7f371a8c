//! The `process` command: read payloads, screen them, notify Slack.

use std::path::Path;

use tokio::io::AsyncReadExt;

use starfeed_core::AppConfig;
use starfeed_db::DedupStore;
use starfeed_reviews::ReviewSource;
use starfeed_sentiment::Estimator;
use starfeed_slack::WebhookNotifier;

use crate::pipeline::process_batch;

/// Run the dedup-and-notify pipeline over every payload in the input.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, a pipeline
/// component cannot be constructed, or every payload fails processing.
/// Individual payload failures are logged and counted instead.
pub(crate) async fn run_process(
    pool: &sqlx::PgPool,
    config: &AppConfig,
    source: ReviewSource,
    input: Option<&Path>,
    marker: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let raw = read_input(input).await?;
    let payloads = split_payloads(&raw)?;

    if payloads.is_empty() {
        println!("no review payloads found in input");
        return Ok(());
    }

    let store = DedupStore::new(pool.clone());
    let estimator = Estimator::new(config.detect_url.as_deref(), config.request_timeout_secs)?;
    let notifier = WebhookNotifier::new(
        config.webhook_urls.clone(),
        &config.bot_username,
        config.use_emoticons,
        config.request_timeout_secs,
    )?;

    let totals = process_batch(
        source, payloads, marker, &store, &estimator, &notifier, dry_run,
    )
    .await?;

    let suffix = if dry_run { " (dry run)" } else { "" };
    println!(
        "processed {} payloads{suffix}: {} notified, {} duplicates, {} failed",
        totals.notified + totals.duplicates + totals.failed,
        totals.notified,
        totals.duplicates,
        totals.failed
    );

    Ok(())
}

async fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// A single JSON object is a batch of one; an array is the batch.
fn split_payloads(raw: &str) -> anyhow::Result<Vec<serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    })
}
