use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        ranking::{RankingUpdateResponse, SetEventRankingRequest, SetTeamsScoreRequest},
        team::TeamResponse,
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/rankings/events",
    request_body = SetEventRankingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Events of the order ranked across the category", body = RankingUpdateResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 503, description = "Some rankings could not be saved, retry")
    ),
    tag = "rankings"
)]
pub async fn set_event_ranking(
    State(db): State<Database>,
    Json(req): Json<SetEventRankingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let summary = services::set_event_ranking(&db, req.order, &req.category).await?;

    Ok(Json(RankingUpdateResponse::from(summary)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/rankings/scores",
    request_body = SetTeamsScoreRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Final scores recomputed for the category", body = RankingUpdateResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 503, description = "Some scores could not be saved, retry")
    ),
    tag = "rankings"
)]
pub async fn set_teams_score(
    State(db): State<Database>,
    Json(req): Json<SetTeamsScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let summary = services::set_teams_score(&db, &req.category).await?;

    Ok(Json(RankingUpdateResponse::from(summary)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/{category}",
    params(
        ("category" = String, Path, description = "Team category")
    ),
    responses(
        (status = 200, description = "Teams ordered by ascending final score", body = Vec<TeamResponse>)
    ),
    tag = "rankings"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Path(category): Path<String>,
) -> Result<Json<Vec<TeamResponse>>, WebError> {
    let teams = services::leaderboard(&db, &category).await?;

    Ok(Json(teams))
}
