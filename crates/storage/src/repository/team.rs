use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::Team;

/// Repository for Team database operations
pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every team across categories
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, category, members, final_score, created_at
            FROM teams
            ORDER BY category, created_at, name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Teams of one category in registration order
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, category, members, final_score, created_at
            FROM teams
            WHERE category = $1
            ORDER BY created_at, team_id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Teams of one category, best final score first. Unscored teams come last.
    pub async fn list_leaderboard(&self, category: &str) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, category, members, final_score, created_at
            FROM teams
            WHERE category = $1
            ORDER BY final_score ASC NULLS LAST, name
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, category, members, final_score, created_at
            FROM teams
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Resolve the team an event operation refers to
    pub async fn find_id_by_name(&self, name: &str) -> Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>("SELECT team_id FROM teams WHERE name = $1")
            .bind(name)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StorageError::UnknownTeam(name.to_string()))
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, category, members)
            VALUES ($1, $2, $3)
            RETURNING team_id, name, category, members, final_score, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.category)
        .bind(&req.members)
        .fetch_one(self.pool)
        .await
        .map_err(map_name_conflict)?;

        Ok(team)
    }

    pub async fn update(&self, existing: &Team, req: &UpdateTeamRequest) -> Result<Team> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let category = req.category.as_ref().unwrap_or(&existing.category);
        let members = req.members.as_ref().unwrap_or(&existing.members);

        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $2, category = $3, members = $4
            WHERE team_id = $1
            RETURNING team_id, name, category, members, final_score, created_at
            "#,
        )
        .bind(existing.team_id)
        .bind(name)
        .bind(category)
        .bind(members)
        .fetch_optional(self.pool)
        .await
        .map_err(map_name_conflict)?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Delete a team; its events go with it
    pub async fn delete(&self, team_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE team_id = $1")
            .bind(team_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn update_final_score(&self, team_id: Uuid, final_score: i32) -> Result<()> {
        let result = sqlx::query("UPDATE teams SET final_score = $2 WHERE team_id = $1")
            .bind(team_id)
            .bind(final_score)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn map_name_conflict(e: sqlx::Error) -> StorageError {
    let err = StorageError::from(e);
    if err.is_unique_violation() {
        return StorageError::ConstraintViolation("Team name already exists".to_string());
    }
    err
}
