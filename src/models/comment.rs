use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client context recorded with every comment, kept for moderation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentMetadata {
    #[serde(default)]
    pub user_agent: String,
    /// Client epoch millis at submission time.
    #[serde(default)]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    /// Store-assigned identity. None until the store assigns one, never
    /// mutated afterwards.
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub rating: i32,
    /// Client-side creation stamp, set by the sanitizer.
    pub created_at: Option<DateTime<Utc>>,
    /// Store-assigned ordering timestamp, authoritative for sort order.
    /// Assigned by the database clock at write time to avoid clock-skew
    /// ordering bugs across clients.
    pub timestamp: Option<DateTime<Utc>>,
    pub is_approved: bool,
    pub is_visible: bool,
    #[sqlx(json)]
    pub metadata: CommentMetadata,
}

impl Default for Comment {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            comment: String::new(),
            rating: 1,
            created_at: None,
            timestamp: None,
            is_approved: true,
            is_visible: true,
            metadata: CommentMetadata::default(),
        }
    }
}
