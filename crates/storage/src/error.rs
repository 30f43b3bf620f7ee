use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("You are trying to use undefined team '{0}'")]
    UnknownTeam(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Retry event ranking setup ({failed} of {total} updates failed)")]
    RankingPersistence { failed: usize, total: usize },

    #[error("Retry team final scores setup ({failed} of {total} updates failed)")]
    ScorePersistence { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_check_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23514")
        )
    }

    /// Whether the caller should simply re-run the batch that produced this error
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StorageError::RankingPersistence { .. } | StorageError::ScorePersistence { .. }
        )
    }
}
