//! `vcm sync` — mirror the collection folder into the local store

use crate::services::{DiscogsClient, SyncEngine};
use tracing::{error, info};
use vcm_common::Config;

/// Run a full sync pass
///
/// Sync failures are logged rather than propagated; the process exits
/// normally after the final "Exited" line either way.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let pool = vcm_common::db::init_database_pool(&config.database_path).await?;

    let client = DiscogsClient::new(config)?;
    let engine = SyncEngine::new(client, pool);

    if let Err(err) = engine.sync().await {
        error!("Failed: {err:#}");
    }
    info!("Exited");

    Ok(())
}
