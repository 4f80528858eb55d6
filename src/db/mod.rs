pub mod comment;

pub use comment::RECENT_COMMENTS_LIMIT;

/// Failure kinds at the store boundary, classified from the driver error so
/// callers can pick guidance text per kind.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Unknown(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // insufficient_privilege
                Some("42501") => Self::PermissionDenied(db_err.to_string()),
                // undefined_table, invalid_catalog_name
                Some("42P01") | Some("3D000") => Self::NotFound(db_err.to_string()),
                _ => Self::Unknown(db_err.to_string()),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::Unavailable(err.to_string()),
            sqlx::Error::RowNotFound => Self::NotFound(err.to_string()),
            _ => Self::Unknown(err.to_string()),
        }
    }
}
