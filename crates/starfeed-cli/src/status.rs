//! Read-only dedup store query handler.

use starfeed_db::DedupStore;

/// Show how many reviews have been recorded and the most recent keys.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) async fn run_status(pool: &sqlx::PgPool, limit: i64) -> anyhow::Result<()> {
    let store = DedupStore::new(pool.clone());

    let total = store.count().await?;
    let rows = store.recent(limit).await?;

    if rows.is_empty() {
        println!("no reviews recorded yet; run `process` first");
        return Ok(());
    }

    println!("recorded reviews: {total}");
    println!();
    println!("{:<22}KEY", "FIRST SEEN");
    for row in &rows {
        let seen = row.first_seen_at.format("%Y-%m-%d %H:%M").to_string();
        println!("{seen:<22}{}", row.dedup_key);
    }

    Ok(())
}
