//! Collection sync orchestration
//!
//! Drives the paginated fetch loop and reconciles every release of a
//! page before moving on. Pages are strictly sequential because each
//! page's URL comes from the previous response; releases within a
//! page are reconciled concurrently with a join barrier per page.

use crate::services::discogs::{CollectionPage, DiscogsClient};
use crate::services::{normalizer, reconciler};
use anyhow::Result;
use futures::future::try_join_all;
use sqlx::SqlitePool;
use tracing::info;

/// Sync orchestrator
pub struct SyncEngine {
    client: DiscogsClient,
    db: SqlitePool,
}

impl SyncEngine {
    pub fn new(client: DiscogsClient, db: SqlitePool) -> Self {
        Self { client, db }
    }

    /// Run one full sync pass over the collection folder
    ///
    /// Any fetch, parse, or reconcile error aborts the run
    /// immediately; pages already processed stay committed. There is
    /// no resume and no partial-page retry.
    pub async fn sync(&self) -> Result<()> {
        let mut url = Some(self.client.first_page_url());

        while let Some(page_url) = url {
            let CollectionPage {
                pagination,
                releases,
            } = self.client.fetch_page(&page_url).await?;

            info!(
                page = pagination.page,
                releases = releases.len(),
                "Fetched page of collection"
            );

            url = pagination.urls.next;

            let simplified: Vec<_> = releases.into_iter().map(normalizer::normalize).collect();
            try_join_all(
                simplified
                    .iter()
                    .map(|release| reconciler::reconcile(&self.db, release)),
            )
            .await?;

            info!(page = pagination.page, "Processed page");
        }

        Ok(())
    }
}
