//! Per-release reconciliation
//!
//! Makes the store match one freshly fetched release: upsert the
//! release row, then replace its genre and style tag sets. All steps
//! run in a single transaction per release, so a failure leaves no
//! partially reconciled release behind. There is no cross-release
//! transaction; releases committed earlier in a sync stay committed.

use crate::services::normalizer::SimplifiedRelease;
use sqlx::SqlitePool;
use vcm_common::db::releases::{self, Release};
use vcm_common::db::tags;
use vcm_common::Result;

/// Reconcile one release into the store
///
/// The release row must exist before any tag row is written; the
/// upsert-then-replace ordering inside the transaction guarantees it.
pub async fn reconcile(pool: &SqlitePool, release: &SimplifiedRelease) -> Result<()> {
    let mut tx = pool.begin().await?;

    let row = Release {
        id: release.id,
        title: release.title.clone(),
        artist: release.artist.clone(),
    };
    releases::upsert_release(&mut tx, &row).await?;

    tags::delete_genre_tags(&mut tx, release.id).await?;
    tags::delete_style_tags(&mut tx, release.id).await?;

    tags::insert_genre_tags(&mut tx, release.id, &release.genres).await?;
    tags::insert_style_tags(&mut tx, release.id, &release.styles).await?;

    tx.commit().await?;

    Ok(())
}
