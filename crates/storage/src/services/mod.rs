pub mod batch;
pub mod event_ranking;
pub mod store;
pub mod team_scoring;

#[cfg(test)]
mod testing;

pub use event_ranking::{RankedEvent, rank_events, set_event_ranking};
pub use store::{ScoringStore, TeamRankings};
pub use team_scoring::{UNSCORED_FINAL_SCORE, final_score, set_teams_score};

/// Result of a ranking or scoring pass over one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingSummary {
    pub category: String,
    /// Number of events or teams rewritten
    pub updated: usize,
}

impl RankingSummary {
    pub fn message(&self) -> String {
        format!("{} ranking updated", self.category)
    }
}
