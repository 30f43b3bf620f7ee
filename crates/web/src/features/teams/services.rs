use sqlx::PgPool;
use storage::{
    dto::team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
    error::Result,
    models::Team,
    repository::{event::EventRepository, team::TeamRepository},
};

/// Attach each team's events
pub async fn with_events(pool: &PgPool, teams: Vec<Team>) -> Result<Vec<TeamResponse>> {
    let team_ids: Vec<_> = teams.iter().map(|t| t.team_id).collect();
    let events = EventRepository::new(pool).list_for_teams(&team_ids).await?;

    Ok(TeamResponse::assemble(teams, events))
}

/// Every team with its events
pub async fn list_teams(pool: &PgPool) -> Result<Vec<TeamResponse>> {
    let teams = TeamRepository::new(pool).list().await?;
    with_events(pool, teams).await
}

/// Get team by name
pub async fn get_team(pool: &PgPool, name: &str) -> Result<TeamResponse> {
    let team = TeamRepository::new(pool).find_by_name(name).await?;
    let events = EventRepository::new(pool)
        .list_for_teams(&[team.team_id])
        .await?;

    Ok(TeamResponse::new(team, events))
}

/// Register a new team
pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<TeamResponse> {
    let team = TeamRepository::new(pool).create(request).await?;
    tracing::info!("Registered team {} in category {}", team.name, team.category);

    Ok(TeamResponse::new(team, Vec::new()))
}

/// Update a team addressed by its current name
pub async fn update_team(
    pool: &PgPool,
    name: &str,
    request: &UpdateTeamRequest,
) -> Result<TeamResponse> {
    let repo = TeamRepository::new(pool);

    let existing = repo.find_by_name(name).await?;
    let updated = repo.update(&existing, request).await?;
    let events = EventRepository::new(pool)
        .list_for_teams(&[updated.team_id])
        .await?;

    Ok(TeamResponse::new(updated, events))
}

/// Delete a team and its events, returning what was removed
pub async fn delete_team(pool: &PgPool, name: &str) -> Result<TeamResponse> {
    let removed = get_team(pool, name).await?;
    TeamRepository::new(pool).delete(removed.team_id).await?;
    tracing::info!("Deleted team {}", removed.name);

    Ok(removed)
}
