use storage::{
    Database,
    dto::team::TeamResponse,
    error::Result,
    repository::team::TeamRepository,
    services::{self as scoring, RankingSummary},
};

use crate::features::teams::services::with_events;

/// Rank the events of one order number across a category
pub async fn set_event_ranking(
    db: &Database,
    order: i32,
    category: &str,
) -> Result<RankingSummary> {
    scoring::set_event_ranking(db, order, category).await
}

/// Recompute final scores for a category
pub async fn set_teams_score(db: &Database, category: &str) -> Result<RankingSummary> {
    scoring::set_teams_score(db, category).await
}

/// Teams of a category, best final score first
pub async fn leaderboard(db: &Database, category: &str) -> Result<Vec<TeamResponse>> {
    let teams = TeamRepository::new(db.pool())
        .list_leaderboard(category)
        .await?;
    with_events(db.pool(), teams).await
}
