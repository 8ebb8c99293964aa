//! Release row persistence
//!
//! Release identity is the external Discogs release id: rows are
//! created on first sync encounter and overwritten on later passes.
//! Sync never deletes a release row.

use crate::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

/// Release record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub id: i64,
    pub title: String,
    pub artist: Option<String>,
}

/// Insert a release row, or overwrite title/artist if it exists
pub async fn upsert_release(conn: &mut SqliteConnection, release: &Release) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO releases (id, title, artist, created_at, updated_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            artist = excluded.artist,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(release.id)
    .bind(&release.title)
    .bind(&release.artist)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// All releases, ordered by artist ascending
pub async fn list_releases(pool: &SqlitePool) -> Result<Vec<Release>> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, artist
        FROM releases
        ORDER BY artist ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(release_from_row).collect())
}

/// Resolve release rows for a set of ids
pub async fn find_releases_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Release>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT id, title, artist FROM releases WHERE id IN ({placeholders})");

    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }

    let rows = query.fetch_all(pool).await?;

    Ok(rows.into_iter().map(release_from_row).collect())
}

fn release_from_row(row: SqliteRow) -> Release {
    Release {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        crate::db::init_tables(&pool).await.expect("init failed");
        pool
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_overwrites() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let release = Release {
            id: 42,
            title: "First Title".to_string(),
            artist: Some("First Artist".to_string()),
        };
        upsert_release(&mut conn, &release).await.expect("insert failed");

        let updated = Release {
            id: 42,
            title: "Second Title".to_string(),
            artist: None,
        };
        upsert_release(&mut conn, &updated).await.expect("update failed");
        drop(conn);

        let all = list_releases(&pool).await.expect("list failed");
        assert_eq!(all, vec![updated]);
    }

    #[tokio::test]
    async fn test_list_releases_orders_by_artist() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        for (id, title, artist) in [
            (1, "Z", Some("Zappa")),
            (2, "A", Some("Abba")),
            (3, "M", None),
        ] {
            let release = Release {
                id,
                title: title.to_string(),
                artist: artist.map(str::to_string),
            };
            upsert_release(&mut conn, &release).await.unwrap();
        }
        drop(conn);

        let all = list_releases(&pool).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        // SQLite sorts NULL artists first in ascending order
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_find_releases_by_ids() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        for id in [1, 2, 3] {
            let release = Release {
                id,
                title: format!("Title {id}"),
                artist: None,
            };
            upsert_release(&mut conn, &release).await.unwrap();
        }
        drop(conn);

        let found = find_releases_by_ids(&pool, &[1, 3, 99]).await.unwrap();
        let mut ids: Vec<i64> = found.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);

        let none = find_releases_by_ids(&pool, &[]).await.unwrap();
        assert!(none.is_empty());
    }
}
