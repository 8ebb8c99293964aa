//! `vcm style [GENRE]` — pick a style and list matching releases

use crate::commands::print_releases;
use crate::services::QueryEngine;
use anyhow::Context;
use vcm_common::db::tags::TagKind;
use vcm_common::Config;

/// Prompt for a style from the distinct-style list and print the
/// matching releases, optionally narrowed to a genre
pub async fn run(config: &Config, genre: Option<String>) -> anyhow::Result<()> {
    let pool = vcm_common::db::init_database_pool(&config.database_path).await?;
    let engine = QueryEngine::new(pool);

    let styles = engine.distinct_values(TagKind::Style).await?;
    if styles.is_empty() {
        println!("No styles in the local store; run `vcm sync` first");
        return Ok(());
    }

    let style = inquire::Select::new("Select style", styles)
        .prompt()
        .context("style selection aborted")?;

    let releases = engine.find_releases(genre.as_deref(), Some(&style)).await?;
    print_releases(&releases);

    Ok(())
}
