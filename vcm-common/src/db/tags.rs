//! Genre and style tag persistence
//!
//! Tags are replaced wholesale per release on every sync pass: the
//! current set is deleted and the freshly fetched set inserted, so a
//! release's tags always mirror the most recent fetch. Write
//! functions take a connection so they compose into the per-release
//! reconcile transaction.

use crate::Result;
use sqlx::{Row, SqliteConnection, SqlitePool};

/// Tag dimension selector for value listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Genre,
    Style,
}

/// Delete all genre tags for a release
pub async fn delete_genre_tags(conn: &mut SqliteConnection, release_id: i64) -> Result<()> {
    sqlx::query("DELETE FROM genre_tags WHERE release_id = ?")
        .bind(release_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Delete all style tags for a release
pub async fn delete_style_tags(conn: &mut SqliteConnection, release_id: i64) -> Result<()> {
    sqlx::query("DELETE FROM style_tags WHERE release_id = ?")
        .bind(release_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Insert one genre tag row per value
pub async fn insert_genre_tags(
    conn: &mut SqliteConnection,
    release_id: i64,
    genres: &[String],
) -> Result<()> {
    for genre in genres {
        sqlx::query("INSERT INTO genre_tags (release_id, genre) VALUES (?, ?)")
            .bind(release_id)
            .bind(genre)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Insert one style tag row per value
pub async fn insert_style_tags(
    conn: &mut SqliteConnection,
    release_id: i64,
    styles: &[String],
) -> Result<()> {
    for style in styles {
        sqlx::query("INSERT INTO style_tags (release_id, style) VALUES (?, ?)")
            .bind(release_id)
            .bind(style)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Ids of releases carrying the given genre
pub async fn release_ids_with_genre(pool: &SqlitePool, genre: &str) -> Result<Vec<i64>> {
    let rows = sqlx::query("SELECT DISTINCT release_id FROM genre_tags WHERE genre = ?")
        .bind(genre)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|row| row.get("release_id")).collect())
}

/// Ids of releases carrying the given style
pub async fn release_ids_with_style(pool: &SqlitePool, style: &str) -> Result<Vec<i64>> {
    let rows = sqlx::query("SELECT DISTINCT release_id FROM style_tags WHERE style = ?")
        .bind(style)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|row| row.get("release_id")).collect())
}

/// Current genre tags of one release
pub async fn genre_tags_for_release(pool: &SqlitePool, release_id: i64) -> Result<Vec<String>> {
    let rows = sqlx::query("SELECT genre FROM genre_tags WHERE release_id = ? ORDER BY id")
        .bind(release_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|row| row.get("genre")).collect())
}

/// Current style tags of one release
pub async fn style_tags_for_release(pool: &SqlitePool, release_id: i64) -> Result<Vec<String>> {
    let rows = sqlx::query("SELECT style FROM style_tags WHERE release_id = ? ORDER BY id")
        .bind(release_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|row| row.get("style")).collect())
}

/// Distinct tag values, sorted ascending with duplicates collapsed
pub async fn distinct_values(pool: &SqlitePool, kind: TagKind) -> Result<Vec<String>> {
    // BINARY collation keeps the ordering case sensitive
    let sql = match kind {
        TagKind::Genre => "SELECT DISTINCT genre AS value FROM genre_tags ORDER BY value ASC",
        TagKind::Style => "SELECT DISTINCT style AS value FROM style_tags ORDER BY value ASC",
    };

    let rows = sqlx::query(sql).fetch_all(pool).await?;

    Ok(rows.into_iter().map(|row| row.get("value")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::releases::{upsert_release, Release};

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        crate::db::init_tables(&pool).await.expect("init failed");
        pool
    }

    async fn seed_release(pool: &SqlitePool, id: i64) {
        let mut conn = pool.acquire().await.unwrap();
        let release = Release {
            id,
            title: format!("Title {id}"),
            artist: None,
        };
        upsert_release(&mut conn, &release).await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_and_delete_genre_tags() {
        let pool = test_pool().await;
        seed_release(&pool, 1).await;

        let mut conn = pool.acquire().await.unwrap();
        insert_genre_tags(&mut conn, 1, &["Rock".to_string(), "Jazz".to_string()])
            .await
            .unwrap();
        drop(conn);

        assert_eq!(
            genre_tags_for_release(&pool, 1).await.unwrap(),
            vec!["Rock".to_string(), "Jazz".to_string()]
        );

        let mut conn = pool.acquire().await.unwrap();
        delete_genre_tags(&mut conn, 1).await.unwrap();
        drop(conn);

        assert!(genre_tags_for_release(&pool, 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_release_ids_with_genre_deduplicates() {
        let pool = test_pool().await;
        seed_release(&pool, 1).await;

        // Same (release, genre) fact stored twice still yields one id
        let mut conn = pool.acquire().await.unwrap();
        insert_genre_tags(&mut conn, 1, &["Rock".to_string(), "Rock".to_string()])
            .await
            .unwrap();
        drop(conn);

        assert_eq!(release_ids_with_genre(&pool, "Rock").await.unwrap(), vec![1]);
        assert!(release_ids_with_genre(&pool, "Jazz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_distinct_values_sorted_and_deduplicated() {
        let pool = test_pool().await;
        seed_release(&pool, 1).await;
        seed_release(&pool, 2).await;

        let mut conn = pool.acquire().await.unwrap();
        insert_genre_tags(&mut conn, 1, &["Rock".to_string(), "Electronic".to_string()])
            .await
            .unwrap();
        insert_genre_tags(&mut conn, 2, &["Rock".to_string(), "Jazz".to_string()])
            .await
            .unwrap();
        insert_style_tags(&mut conn, 1, &["punk".to_string(), "Punk".to_string()])
            .await
            .unwrap();
        drop(conn);

        let genres = distinct_values(&pool, TagKind::Genre).await.unwrap();
        assert_eq!(genres, vec!["Electronic", "Jazz", "Rock"]);

        // Case sensitive ordinal order: uppercase sorts before lowercase
        let styles = distinct_values(&pool, TagKind::Style).await.unwrap();
        assert_eq!(styles, vec!["Punk", "punk"]);
    }
}
