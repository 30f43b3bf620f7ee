use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{CreateEventRequest, EventResponse, UpdateEventRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/teams/{name}/events",
    params(
        ("name" = String, Path, description = "Owning team name")
    ),
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation error or unknown team"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Path(team_name): Path<String>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &team_name, &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{name}/events/{event_id}",
    params(
        ("name" = String, Path, description = "Owning team name"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Validation error or unknown team"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found for this team")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path((team_name, event_id)): Path<(String, Uuid)>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_metrics()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let event = services::update_event(db.pool(), &team_name, event_id, &req).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{name}/events/{event_id}",
    params(
        ("name" = String, Path, description = "Owning team name"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event deleted", body = EventResponse),
        (status = 400, description = "Unknown team"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found for this team")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path((team_name, event_id)): Path<(String, Uuid)>,
) -> Result<Response, WebError> {
    let event = services::delete_event(db.pool(), &team_name, event_id).await?;

    Ok(Json(event).into_response())
}
