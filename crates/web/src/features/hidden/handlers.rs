use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::hidden::{CreateHiddenRequest, HiddenResponse, UpdateHiddenRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/hidden/{name}",
    params(
        ("name" = String, Path, description = "Flag name")
    ),
    responses(
        (status = 200, description = "Flag found", body = HiddenResponse),
        (status = 404, description = "Flag not found")
    ),
    tag = "hidden"
)]
pub async fn get_hidden(
    State(db): State<Database>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let hidden = services::get_hidden(db.pool(), &name).await?;

    Ok(Json(hidden).into_response())
}

#[utoipa::path(
    post,
    path = "/api/hidden",
    request_body = CreateHiddenRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Flag created", body = HiddenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Flag already exists")
    ),
    tag = "hidden"
)]
pub async fn create_hidden(
    State(db): State<Database>,
    Json(req): Json<CreateHiddenRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let hidden = services::create_hidden(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(hidden)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/hidden/{name}",
    params(
        ("name" = String, Path, description = "Flag name")
    ),
    request_body = UpdateHiddenRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Flag updated", body = HiddenResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Flag not found")
    ),
    tag = "hidden"
)]
pub async fn update_hidden(
    State(db): State<Database>,
    Path(name): Path<String>,
    Json(req): Json<UpdateHiddenRequest>,
) -> Result<Response, WebError> {
    let hidden = services::update_hidden(db.pool(), &name, req.flag).await?;

    Ok(Json(hidden).into_response())
}
