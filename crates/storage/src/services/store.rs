use async_trait::async_trait;
use uuid::Uuid;

use crate::Database;
use crate::error::Result;
use crate::models::Event;
use crate::repository::{event::EventRepository, team::TeamRepository};

/// A team of a category with the rankings of its events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRankings {
    pub team_id: Uuid,
    pub name: String,
    /// One entry per event; `None` for events not ranked yet
    pub rankings: Vec<Option<i32>>,
}

/// Data access needed by the ranking and scoring passes
#[async_trait]
pub trait ScoringStore: Send + Sync {
    async fn find_events(&self, order: i32, category: &str) -> Result<Vec<Event>>;

    async fn find_team_rankings(&self, category: &str) -> Result<Vec<TeamRankings>>;

    async fn update_event_ranking(&self, event_id: Uuid, ranking: i32) -> Result<()>;

    async fn update_team_score(&self, team_id: Uuid, final_score: i32) -> Result<()>;
}

#[async_trait]
impl ScoringStore for Database {
    async fn find_events(&self, order: i32, category: &str) -> Result<Vec<Event>> {
        EventRepository::new(self.pool())
            .list_by_order_and_category(order, category)
            .await
    }

    async fn find_team_rankings(&self, category: &str) -> Result<Vec<TeamRankings>> {
        let teams = TeamRepository::new(self.pool())
            .list_by_category(category)
            .await?;
        let team_ids: Vec<Uuid> = teams.iter().map(|t| t.team_id).collect();
        let events = EventRepository::new(self.pool())
            .list_for_teams(&team_ids)
            .await?;

        Ok(teams
            .into_iter()
            .map(|team| TeamRankings {
                rankings: events
                    .iter()
                    .filter(|e| e.team_id == team.team_id)
                    .map(|e| e.ranking)
                    .collect(),
                team_id: team.team_id,
                name: team.name,
            })
            .collect())
    }

    async fn update_event_ranking(&self, event_id: Uuid, ranking: i32) -> Result<()> {
        EventRepository::new(self.pool())
            .update_ranking(event_id, ranking)
            .await
    }

    async fn update_team_score(&self, team_id: Uuid, final_score: i32) -> Result<()> {
        TeamRepository::new(self.pool())
            .update_final_score(team_id, final_score)
            .await
    }
}
