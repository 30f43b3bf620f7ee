use async_graphql::{Context, Object, Result};
use storage::{
    Database,
    dto::{hidden::HiddenResponse, team::TeamResponse},
    error::StorageError,
};

use super::{API_INFO, storage_error};
use crate::features::{hidden, rankings, teams};

pub struct QueryRoot;

/// `NotFound` becomes `null`
fn optional<T>(result: storage::error::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound) => Ok(None),
        Err(e) => Err(storage_error(e)),
    }
}

#[Object]
impl QueryRoot {
    async fn info(&self) -> &'static str {
        API_INFO
    }

    /// Every team with its events
    async fn feed(&self, ctx: &Context<'_>) -> Result<Vec<TeamResponse>> {
        let db = ctx.data::<Database>()?;
        teams::services::list_teams(db.pool())
            .await
            .map_err(storage_error)
    }

    /// Teams of a category ordered by ascending final score
    async fn leaderboard(&self, ctx: &Context<'_>, category: String) -> Result<Vec<TeamResponse>> {
        let db = ctx.data::<Database>()?;
        rankings::services::leaderboard(db, &category)
            .await
            .map_err(storage_error)
    }

    async fn team(&self, ctx: &Context<'_>, name: String) -> Result<Option<TeamResponse>> {
        let db = ctx.data::<Database>()?;
        optional(teams::services::get_team(db.pool(), &name).await)
    }

    async fn hidden(&self, ctx: &Context<'_>, name: String) -> Result<Option<HiddenResponse>> {
        let db = ctx.data::<Database>()?;
        optional(hidden::services::get_hidden(db.pool(), &name).await)
    }
}
