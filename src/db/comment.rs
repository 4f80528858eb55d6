use crate::db::StoreError;
use crate::models;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// Result-count cap for the recent-comments window.
pub const RECENT_COMMENTS_LIMIT: i64 = 20;

/// Append a comment, letting the database assign both the document id and
/// the authoritative ordering timestamp.
pub async fn insert(pool: &PgPool, mut comment: models::Comment) -> Result<models::Comment, StoreError> {
    let query_span = tracing::info_span!("Saving new comment into the database");
    sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
        r#"
        INSERT INTO comment (name, email, comment, rating, created_at, is_approved, is_visible, metadata)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, "timestamp"
        "#,
    )
    .bind(&comment.name)
    .bind(&comment.email)
    .bind(&comment.comment)
    .bind(comment.rating)
    .bind(comment.created_at)
    .bind(comment.is_approved)
    .bind(comment.is_visible)
    .bind(sqlx::types::Json(&comment.metadata))
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |(id, timestamp)| {
        comment.id = Some(id);
        comment.timestamp = Some(timestamp);
        comment
    })
    .map_err(|e| {
        tracing::error!("Failed to execute insert query: {:?}", e);
        StoreError::from(e)
    })
}

/// Fetch up to `limit` comments ordered by store timestamp descending.
/// An empty table yields an empty vec, not an error.
pub async fn fetch_recent(pool: &PgPool, limit: i64) -> Result<Vec<models::Comment>, StoreError> {
    let limit = limit.clamp(1, RECENT_COMMENTS_LIMIT);
    let query_span = tracing::info_span!("Fetch recent comments.", limit);
    sqlx::query_as::<_, models::Comment>(
        r#"
        SELECT id, name, email, comment, rating, created_at, "timestamp",
               is_approved, is_visible, metadata
        FROM comment
        ORDER BY "timestamp" DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch comments, error: {:?}", e);
        StoreError::from(e)
    })
}
