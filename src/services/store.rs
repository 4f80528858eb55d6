//! Store adapter seam.
//!
//! The comments collection is append-and-list only by design: no update or
//! delete operations exist on the trait, so there are no concurrent-edit
//! conflicts to resolve. Routes and the submit flow depend on the trait
//! object, never on the Postgres implementation, which keeps the flow
//! testable against an in-memory fake.

use crate::db::{self, StoreError};
use crate::models;
use sqlx::PgPool;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait CommentStore: Send + Sync {
    /// Append a record, letting the store assign document identity and the
    /// authoritative insertion timestamp. Callers must not assume partial
    /// writes are visible.
    async fn append(&self, comment: models::Comment) -> Result<Uuid, StoreError>;

    /// Up to `limit` records ordered by store timestamp descending; an
    /// empty collection is an empty vec, not an error.
    async fn list_recent(&self, limit: i64) -> Result<Vec<models::Comment>, StoreError>;
}

pub struct PgCommentStore {
    pool: PgPool,
}

impl PgCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CommentStore for PgCommentStore {
    async fn append(&self, comment: models::Comment) -> Result<Uuid, StoreError> {
        let stored = db::comment::insert(&self.pool, comment).await?;
        stored
            .id
            .ok_or_else(|| StoreError::Unknown("store did not assign an id".to_string()))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<models::Comment>, StoreError> {
        db::comment::fetch_recent(&self.pool, limit).await
    }
}
