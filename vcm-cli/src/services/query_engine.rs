//! Tag-filtered release queries
//!
//! Read-only lookups over the store: releases by genre and/or style,
//! and distinct tag value listings for the interactive prompts.

use sqlx::SqlitePool;
use std::collections::HashSet;
use vcm_common::db::releases::{self, Release};
use vcm_common::db::tags::{self, TagKind};
use vcm_common::Result;

/// Query engine over the local store
pub struct QueryEngine {
    db: SqlitePool,
}

impl QueryEngine {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Releases matching the given genre and/or style filters
    ///
    /// With both filters set a release qualifies only if it carries
    /// the genre AND the style; the intersection is computed by
    /// release id. With neither filter, every release matches.
    /// Results are sorted by artist ascending; ties keep their
    /// relative order.
    pub async fn find_releases(
        &self,
        genre: Option<&str>,
        style: Option<&str>,
    ) -> Result<Vec<Release>> {
        let ids = match (genre, style) {
            (Some(genre), Some(style)) => {
                let with_genre = tags::release_ids_with_genre(&self.db, genre).await?;
                let with_style: HashSet<i64> = tags::release_ids_with_style(&self.db, style)
                    .await?
                    .into_iter()
                    .collect();
                with_genre
                    .into_iter()
                    .filter(|id| with_style.contains(id))
                    .collect()
            }
            (Some(genre), None) => tags::release_ids_with_genre(&self.db, genre).await?,
            (None, Some(style)) => tags::release_ids_with_style(&self.db, style).await?,
            (None, None) => return releases::list_releases(&self.db).await,
        };

        let mut matched = releases::find_releases_by_ids(&self.db, &ids).await?;
        matched.sort_by(|a, b| a.artist.cmp(&b.artist));

        Ok(matched)
    }

    /// Distinct tag values, sorted ascending with duplicates collapsed
    pub async fn distinct_values(&self, kind: TagKind) -> Result<Vec<String>> {
        tags::distinct_values(&self.db, kind).await
    }
}
