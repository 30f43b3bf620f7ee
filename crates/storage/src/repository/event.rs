use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::UpdateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::Event;

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Events owned by any of the given teams
    pub async fn list_for_teams(&self, team_ids: &[Uuid]) -> Result<Vec<Event>> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, team_id, event_order, finish_time, reps, weight, ranking, created_at
            FROM events
            WHERE team_id = ANY($1)
            ORDER BY event_order, created_at, event_id
            "#,
        )
        .bind(team_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Events sharing one order number across the teams of a category, in
    /// creation order
    pub async fn list_by_order_and_category(
        &self,
        order: i32,
        category: &str,
    ) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.event_id, e.team_id, e.event_order, e.finish_time, e.reps, e.weight,
                   e.ranking, e.created_at
            FROM events e
            INNER JOIN teams t ON e.team_id = t.team_id
            WHERE e.event_order = $1 AND t.category = $2
            ORDER BY e.created_at, e.event_id
            "#,
        )
        .bind(order)
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_for_team(&self, event_id: Uuid, team_id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, team_id, event_order, finish_time, reps, weight, ranking, created_at
            FROM events
            WHERE event_id = $1 AND team_id = $2
            "#,
        )
        .bind(event_id)
        .bind(team_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn create(&self, team_id: Uuid, order: i32) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (team_id, event_order)
            VALUES ($1, $2)
            RETURNING event_id, team_id, event_order, finish_time, reps, weight, ranking, created_at
            "#,
        )
        .bind(team_id)
        .bind(order)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Apply an update. A supplied metric replaces all three metric columns.
    pub async fn update(&self, existing: &Event, req: &UpdateEventRequest) -> Result<Event> {
        let order = req.order.unwrap_or(existing.order);
        let (time, reps, weight) = req.resolved_metrics(existing);

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET event_order = $2, finish_time = $3, reps = $4, weight = $5
            WHERE event_id = $1
            RETURNING event_id, team_id, event_order, finish_time, reps, weight, ranking, created_at
            "#,
        )
        .bind(existing.event_id)
        .bind(order)
        .bind(time)
        .bind(reps)
        .bind(weight)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_check_violation() {
                return StorageError::ConstraintViolation(
                    "An event records only one of time, reps or weight".to_string(),
                );
            }
            err
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn delete(&self, event_id: Uuid, team_id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            DELETE FROM events
            WHERE event_id = $1 AND team_id = $2
            RETURNING event_id, team_id, event_order, finish_time, reps, weight, ranking, created_at
            "#,
        )
        .bind(event_id)
        .bind(team_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn update_ranking(&self, event_id: Uuid, ranking: i32) -> Result<()> {
        let result = sqlx::query("UPDATE events SET ranking = $2 WHERE event_id = $1")
            .bind(event_id)
            .bind(ranking)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
