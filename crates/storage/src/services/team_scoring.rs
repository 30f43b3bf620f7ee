use super::RankingSummary;
use super::batch::write_all;
use super::store::ScoringStore;
use crate::error::{Result, StorageError};

/// Final score of a team without any ranked event. Worse than any real sum.
pub const UNSCORED_FINAL_SCORE: i32 = 999;

/// Sum of the present rankings, or [`UNSCORED_FINAL_SCORE`] when that sum is
/// not strictly positive
pub fn final_score(rankings: &[Option<i32>]) -> i32 {
    let total: i64 = rankings.iter().flatten().map(|r| i64::from(*r)).sum();

    if total > 0 {
        i32::try_from(total).unwrap_or(i32::MAX)
    } else {
        UNSCORED_FINAL_SCORE
    }
}

/// Recomputes and persists the final score of every team in a category.
///
/// Scores are written concurrently; any failed write fails the pass and the
/// scores already written are kept.
pub async fn set_teams_score<S>(store: &S, category: &str) -> Result<RankingSummary>
where
    S: ScoringStore + ?Sized,
{
    let teams = store.find_team_rankings(category).await?;

    let scores: Vec<_> = teams
        .iter()
        .map(|team| {
            let score = final_score(&team.rankings);
            tracing::debug!("Team {} scores {}", team.name, score);
            (team.team_id, score)
        })
        .collect();

    let unscored = scores
        .iter()
        .filter(|(_, score)| *score == UNSCORED_FINAL_SCORE)
        .count();
    if unscored > 1 {
        tracing::info!(
            "{} teams in category {} have no ranked events and share score {}",
            unscored,
            category,
            UNSCORED_FINAL_SCORE
        );
    }

    let outcome = write_all(
        scores
            .iter()
            .map(|(team_id, score)| store.update_team_score(*team_id, *score)),
    )
    .await;

    if !outcome.is_success() {
        for failure in &outcome.failures {
            tracing::error!("Failed to persist team final score: {}", failure);
        }
        return Err(StorageError::ScorePersistence {
            failed: outcome.failed(),
            total: outcome.total,
        });
    }

    tracing::info!("Scored {} teams in category {}", outcome.total, category);

    Ok(RankingSummary {
        category: category.to_string(),
        updated: outcome.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{MemoryStore, event, team};

    #[test]
    fn test_final_score_sums_rankings() {
        assert_eq!(final_score(&[Some(1), Some(3)]), 4);
        assert_eq!(final_score(&[Some(2), None, Some(5)]), 7);
    }

    #[test]
    fn test_final_score_sentinel() {
        assert_eq!(final_score(&[]), UNSCORED_FINAL_SCORE);
        assert_eq!(final_score(&[None, None]), UNSCORED_FINAL_SCORE);
        assert_eq!(final_score(&[Some(0)]), UNSCORED_FINAL_SCORE);
    }

    fn ranked(store: &MemoryStore, team_id: uuid::Uuid, order: i32, ranking: Option<i32>) {
        let mut e = event(team_id, order, Some("1:00"), None, None);
        e.ranking = ranking;
        store.add_event(e);
    }

    #[tokio::test]
    async fn test_scores_are_persisted_per_team() {
        let store = MemoryStore::default();
        let a = store.add_team(team("a", "RX"));
        let b = store.add_team(team("b", "RX"));
        ranked(&store, a, 1, Some(1));
        ranked(&store, a, 2, Some(3));
        ranked(&store, b, 1, Some(2));
        ranked(&store, b, 2, Some(1));

        let summary = set_teams_score(&store, "RX").await.unwrap();

        assert_eq!(summary.updated, 2);
        assert_eq!(summary.message(), "RX ranking updated");
        assert_eq!(store.team(a).final_score, Some(4));
        assert_eq!(store.team(b).final_score, Some(3));
    }

    #[tokio::test]
    async fn test_team_without_ranked_events_gets_sentinel() {
        let store = MemoryStore::default();
        let idle = store.add_team(team("idle", "RX"));
        let pending = store.add_team(team("pending", "RX"));
        ranked(&store, pending, 1, None);

        set_teams_score(&store, "RX").await.unwrap();

        assert_eq!(store.team(idle).final_score, Some(UNSCORED_FINAL_SCORE));
        assert_eq!(store.team(pending).final_score, Some(UNSCORED_FINAL_SCORE));
    }

    #[tokio::test]
    async fn test_other_categories_untouched() {
        let store = MemoryStore::default();
        let rx = store.add_team(team("rx", "RX"));
        let scaled = store.add_team(team("scaled", "Scaled"));
        ranked(&store, rx, 1, Some(2));
        ranked(&store, scaled, 1, Some(1));

        set_teams_score(&store, "RX").await.unwrap();

        assert_eq!(store.team(rx).final_score, Some(2));
        assert_eq!(store.team(scaled).final_score, None);
    }

    #[tokio::test]
    async fn test_previous_score_is_overwritten() {
        let store = MemoryStore::default();
        let a = store.add_team(team("a", "RX"));
        ranked(&store, a, 1, Some(5));
        set_teams_score(&store, "RX").await.unwrap();
        assert_eq!(store.team(a).final_score, Some(5));

        ranked(&store, a, 2, Some(2));
        set_teams_score(&store, "RX").await.unwrap();
        assert_eq!(store.team(a).final_score, Some(7));
    }

    #[tokio::test]
    async fn test_failed_write_fails_whole_pass() {
        let store = MemoryStore::default();
        let a = store.add_team(team("a", "RX"));
        let b = store.add_team(team("b", "RX"));
        ranked(&store, a, 1, Some(1));
        ranked(&store, b, 1, Some(2));
        store.fail_writes_for(b);

        let err = set_teams_score(&store, "RX").await.unwrap_err();

        assert!(matches!(
            err,
            StorageError::ScorePersistence {
                failed: 1,
                total: 2
            }
        ));
        assert!(err.to_string().starts_with("Retry team final scores setup"));
        assert_eq!(store.team(a).final_score, Some(1));
        assert_eq!(store.team(b).final_score, None);
    }

    #[tokio::test]
    async fn test_ranking_then_scoring() {
        let store = MemoryStore::default();
        let a = store.add_team(team("a", "RX"));
        let b = store.add_team(team("b", "RX"));
        store.add_event(event(a, 1, Some("1:30"), None, None));
        store.add_event(event(b, 1, Some("2:00"), None, None));
        store.add_event(event(a, 2, None, Some(100), None));
        store.add_event(event(b, 2, None, Some(150), None));
        store.add_event(event(a, 3, None, None, Some(150)));
        store.add_event(event(b, 3, None, None, Some(200)));

        for order in 1..=3 {
            crate::services::set_event_ranking(&store, order, "RX")
                .await
                .unwrap();
        }
        set_teams_score(&store, "RX").await.unwrap();

        assert_eq!(store.team(a).final_score, Some(1 + 2 + 2));
        assert_eq!(store.team(b).final_score, Some(2 + 1 + 1));
    }
}
