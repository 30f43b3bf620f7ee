use sqlx::PgPool;
use storage::{
    dto::event::{CreateEventRequest, EventResponse, UpdateEventRequest},
    error::Result,
    repository::{event::EventRepository, team::TeamRepository},
};
use uuid::Uuid;

/// Open an event for the named team
pub async fn create_event(
    pool: &PgPool,
    team_name: &str,
    request: &CreateEventRequest,
) -> Result<EventResponse> {
    let team_id = TeamRepository::new(pool).find_id_by_name(team_name).await?;
    let event = EventRepository::new(pool)
        .create(team_id, request.order)
        .await?;

    Ok(EventResponse::from(event))
}

/// Record a result on one of the named team's events
pub async fn update_event(
    pool: &PgPool,
    team_name: &str,
    event_id: Uuid,
    request: &UpdateEventRequest,
) -> Result<EventResponse> {
    let team_id = TeamRepository::new(pool).find_id_by_name(team_name).await?;
    let repo = EventRepository::new(pool);

    let existing = repo.find_for_team(event_id, team_id).await?;
    let updated = repo.update(&existing, request).await?;

    Ok(EventResponse::from(updated))
}

pub async fn delete_event(pool: &PgPool, team_name: &str, event_id: Uuid) -> Result<EventResponse> {
    let team_id = TeamRepository::new(pool).find_id_by_name(team_name).await?;
    let event = EventRepository::new(pool).delete(event_id, team_id).await?;

    Ok(EventResponse::from(event))
}
