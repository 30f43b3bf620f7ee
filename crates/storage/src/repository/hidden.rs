use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::HiddenFlag;

pub struct HiddenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> HiddenRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<HiddenFlag> {
        let hidden = sqlx::query_as::<_, HiddenFlag>(
            "SELECT name, flag FROM hidden_flags WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(hidden)
    }

    pub async fn create(&self, name: &str, flag: bool) -> Result<HiddenFlag> {
        let hidden = sqlx::query_as::<_, HiddenFlag>(
            r#"
            INSERT INTO hidden_flags (name, flag)
            VALUES ($1, $2)
            RETURNING name, flag
            "#,
        )
        .bind(name)
        .bind(flag)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                return StorageError::ConstraintViolation(
                    "Hidden flag already exists".to_string(),
                );
            }
            err
        })?;

        Ok(hidden)
    }

    pub async fn update_flag(&self, name: &str, flag: bool) -> Result<HiddenFlag> {
        let hidden = sqlx::query_as::<_, HiddenFlag>(
            r#"
            UPDATE hidden_flags
            SET flag = $2
            WHERE name = $1
            RETURNING name, flag
            "#,
        )
        .bind(name)
        .bind(flag)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(hidden)
    }
}
