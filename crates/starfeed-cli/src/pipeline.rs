//! The check -> estimate -> notify -> record pipeline.
//!
//! Reviews are processed one at a time, each fully handled before the next.
//! A review's dedup key is recorded only after every webhook accepted the
//! notification, so a failed delivery leaves the review eligible for the
//! next run.

use starfeed_reviews::{Review, ReviewSource, SeenStore};
use starfeed_sentiment::Estimator;
use starfeed_slack::WebhookNotifier;

/// What happened to a single payload.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The review was new and a notification went out (or would have, on a
    /// dry run).
    Notified { rating: Option<u8> },
    /// The dedup store already knew this review.
    Duplicate,
}

#[derive(Debug, Default)]
pub(crate) struct BatchTotals {
    pub notified: usize,
    pub duplicates: usize,
    pub failed: usize,
}

/// Process one raw payload end to end.
///
/// # Errors
///
/// Fails when the payload is malformed, the dedup store is unreachable, or
/// any webhook rejects the notification. A notify failure happens before
/// the mark-seen step, so the review stays unrecorded.
pub(crate) async fn process_one(
    source: ReviewSource,
    payload: serde_json::Value,
    marker: Option<&str>,
    store: &dyn SeenStore,
    estimator: &Estimator,
    notifier: &WebhookNotifier,
    dry_run: bool,
) -> anyhow::Result<Outcome> {
    let mut review = match source {
        ReviewSource::Trustpilot => Review::from_trustpilot(payload, store).await?,
        ReviewSource::FacebookRating => Review::from_facebook_rating(payload, store).await?,
        ReviewSource::FacebookComment => Review::from_facebook_comment(payload, store).await?,
        ReviewSource::Tweet => Review::from_tweet(payload, marker, store).await?,
    };

    let key = review.dedup_key();
    if !review.is_new {
        tracing::debug!(key = %key, "skipping already-seen review");
        return Ok(Outcome::Duplicate);
    }

    if review.wants_estimate() {
        review.rating = estimator.estimate(&review.text).await;
    }

    if dry_run {
        let message = notifier.render(&review);
        println!("{}", serde_json::to_string_pretty(&message)?);
        tracing::info!(key = %key, rating = ?review.rating, "dry-run: delivery skipped");
        return Ok(Outcome::Notified {
            rating: review.rating,
        });
    }

    notifier.notify(&review).await?;
    store.add(&key).await?;
    tracing::info!(key = %key, rating = ?review.rating, "review notified and recorded");

    Ok(Outcome::Notified {
        rating: review.rating,
    })
}

/// Process a batch of payloads sequentially.
///
/// Per-payload failures are logged and counted rather than aborting the
/// batch; the whole batch only errors when every payload failed.
///
/// # Errors
///
/// Returns an error when the batch is non-empty and no payload succeeded.
pub(crate) async fn process_batch(
    source: ReviewSource,
    payloads: Vec<serde_json::Value>,
    marker: Option<&str>,
    store: &dyn SeenStore,
    estimator: &Estimator,
    notifier: &WebhookNotifier,
    dry_run: bool,
) -> anyhow::Result<BatchTotals> {
    let mut totals = BatchTotals::default();
    let total = payloads.len();

    for payload in payloads {
        match process_one(source, payload, marker, store, estimator, notifier, dry_run).await {
            Ok(Outcome::Notified { .. }) => totals.notified += 1,
            Ok(Outcome::Duplicate) => totals.duplicates += 1,
            Err(e) => {
                tracing::error!(error = %e, "review processing failed");
                totals.failed += 1;
            }
        }
    }

    if totals.failed > 0 {
        tracing::warn!(
            failed = totals.failed,
            total,
            "some reviews failed processing"
        );
    }

    if total > 0 && totals.failed == total {
        anyhow::bail!("all {total} review payloads failed");
    }

    Ok(totals)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
