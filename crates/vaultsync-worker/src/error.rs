use thiserror::Error;

/// Opaque failure from the entity store. The sync core never inspects it; it
/// only aborts the request.
#[derive(Debug, Error)]
#[error("store read failed: {0}")]
pub struct StoreError(pub String);

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self {
        StoreError(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SyncError {
    /// HTTP status the worker answers with.
    pub fn status(&self) -> u16 {
        match self {
            SyncError::UserNotFound(_) => 404,
            SyncError::Store(_) => 500,
        }
    }
}
