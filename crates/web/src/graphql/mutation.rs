use async_graphql::{Context, ID, Object, Result};
use storage::{
    Database,
    dto::{
        event::{CreateEventRequest, EventResponse, UpdateEventRequest},
        hidden::{CreateHiddenRequest, HiddenResponse},
        ranking::{SetEventRankingRequest, SetTeamsScoreRequest},
        team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
    },
};
use uuid::Uuid;
use validator::Validate;

use super::{require_user, storage_error, validation_error};
use crate::features::{events, hidden, rankings, teams};

pub struct MutationRoot;

fn parse_id(id: &ID) -> Result<Uuid> {
    Uuid::parse_str(id.as_str())
        .map_err(|_| validation_error(format!("Invalid event id '{}'", id.as_str())))
}

#[Object]
impl MutationRoot {
    async fn create_team(
        &self,
        ctx: &Context<'_>,
        name: String,
        category: String,
        #[graphql(default)] members: Vec<String>,
    ) -> Result<TeamResponse> {
        require_user(ctx)?;
        let req = CreateTeamRequest {
            name,
            category,
            members,
        };
        req.validate().map_err(validation_error)?;

        let db = ctx.data::<Database>()?;
        teams::services::create_team(db.pool(), &req)
            .await
            .map_err(storage_error)
    }

    async fn update_team(
        &self,
        ctx: &Context<'_>,
        name: String,
        new_name: Option<String>,
        category: Option<String>,
        members: Option<Vec<String>>,
    ) -> Result<TeamResponse> {
        require_user(ctx)?;
        let req = UpdateTeamRequest {
            name: new_name,
            category,
            members,
        };
        req.validate().map_err(validation_error)?;

        let db = ctx.data::<Database>()?;
        teams::services::update_team(db.pool(), &name, &req)
            .await
            .map_err(storage_error)
    }

    async fn delete_team(&self, ctx: &Context<'_>, name: String) -> Result<TeamResponse> {
        require_user(ctx)?;
        let db = ctx.data::<Database>()?;
        teams::services::delete_team(db.pool(), &name)
            .await
            .map_err(storage_error)
    }

    /// Sum each team's event rankings into its final score
    async fn set_teams_score(&self, ctx: &Context<'_>, category: String) -> Result<String> {
        require_user(ctx)?;
        let req = SetTeamsScoreRequest { category };
        req.validate().map_err(validation_error)?;

        let db = ctx.data::<Database>()?;
        let summary = rankings::services::set_teams_score(db, &req.category)
            .await
            .map_err(storage_error)?;

        Ok(summary.message())
    }

    async fn create_event(
        &self,
        ctx: &Context<'_>,
        team_name: String,
        order: i32,
    ) -> Result<EventResponse> {
        require_user(ctx)?;
        let req = CreateEventRequest { order };
        req.validate().map_err(validation_error)?;

        let db = ctx.data::<Database>()?;
        events::services::create_event(db.pool(), &team_name, &req)
            .await
            .map_err(storage_error)
    }

    async fn update_event(
        &self,
        ctx: &Context<'_>,
        id: ID,
        team_name: String,
        order: Option<i32>,
        time: Option<String>,
        reps: Option<i32>,
        weight: Option<i32>,
    ) -> Result<EventResponse> {
        require_user(ctx)?;
        let event_id = parse_id(&id)?;
        let req = UpdateEventRequest {
            order,
            time,
            reps,
            weight,
        };
        req.validate().map_err(validation_error)?;
        req.validate_metrics().map_err(validation_error)?;

        let db = ctx.data::<Database>()?;
        events::services::update_event(db.pool(), &team_name, event_id, &req)
            .await
            .map_err(storage_error)
    }

    async fn delete_event(
        &self,
        ctx: &Context<'_>,
        id: ID,
        team_name: String,
    ) -> Result<EventResponse> {
        require_user(ctx)?;
        let event_id = parse_id(&id)?;

        let db = ctx.data::<Database>()?;
        events::services::delete_event(db.pool(), &team_name, event_id)
            .await
            .map_err(storage_error)
    }

    /// Rank the events of one order number across the teams of a category
    async fn set_event_ranking(
        &self,
        ctx: &Context<'_>,
        order: i32,
        category: String,
    ) -> Result<String> {
        require_user(ctx)?;
        let req = SetEventRankingRequest { order, category };
        req.validate().map_err(validation_error)?;

        let db = ctx.data::<Database>()?;
        let summary = rankings::services::set_event_ranking(db, req.order, &req.category)
            .await
            .map_err(storage_error)?;

        Ok(summary.message())
    }

    async fn create_hidden(
        &self,
        ctx: &Context<'_>,
        name: String,
        flag: bool,
    ) -> Result<HiddenResponse> {
        require_user(ctx)?;
        let req = CreateHiddenRequest { name, flag };
        req.validate().map_err(validation_error)?;

        let db = ctx.data::<Database>()?;
        hidden::services::create_hidden(db.pool(), &req)
            .await
            .map_err(storage_error)
    }

    async fn update_hidden(
        &self,
        ctx: &Context<'_>,
        name: String,
        flag: bool,
    ) -> Result<HiddenResponse> {
        require_user(ctx)?;
        let db = ctx.data::<Database>()?;
        hidden::services::update_hidden(db.pool(), &name, flag)
            .await
            .map_err(storage_error)
    }
}
