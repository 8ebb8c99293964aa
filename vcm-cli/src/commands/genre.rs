//! `vcm genre [STYLE]` — pick a genre and list matching releases

use crate::commands::print_releases;
use crate::services::QueryEngine;
use anyhow::Context;
use vcm_common::db::tags::TagKind;
use vcm_common::Config;

/// Prompt for a genre from the distinct-genre list and print the
/// matching releases, optionally narrowed to a style
pub async fn run(config: &Config, style: Option<String>) -> anyhow::Result<()> {
    let pool = vcm_common::db::init_database_pool(&config.database_path).await?;
    let engine = QueryEngine::new(pool);

    let genres = engine.distinct_values(TagKind::Genre).await?;
    if genres.is_empty() {
        println!("No genres in the local store; run `vcm sync` first");
        return Ok(());
    }

    let genre = inquire::Select::new("Select genre", genres)
        .prompt()
        .context("genre selection aborted")?;

    let releases = engine.find_releases(Some(&genre), style.as_deref()).await?;
    print_releases(&releases);

    Ok(())
}
