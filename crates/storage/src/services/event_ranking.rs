use std::collections::BTreeSet;

use uuid::Uuid;

use super::RankingSummary;
use super::batch::write_all;
use super::store::ScoringStore;
use crate::error::{Result, StorageError};
use crate::models::{Event, Performance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEvent {
    pub event_id: Uuid,
    pub ranking: i32,
}

/// Orders events best first and numbers them 1..=N.
///
/// Equal performances keep their input order.
pub fn rank_events(events: &[Event]) -> Vec<RankedEvent> {
    rank_performances(classify(events))
}

fn classify(events: &[Event]) -> Vec<(Uuid, Performance)> {
    events
        .iter()
        .map(|event| (event.event_id, event.performance()))
        .collect()
}

fn rank_performances(mut scored: Vec<(Uuid, Performance)>) -> Vec<RankedEvent> {
    scored.sort_by(|(_, a), (_, b)| a.compare(b));

    scored
        .into_iter()
        .zip(1..)
        .map(|((event_id, _), ranking)| RankedEvent { event_id, ranking })
        .collect()
}

/// Ranks every event with the given order number among the teams of a
/// category and persists the rankings.
///
/// All rankings are written concurrently. If any write fails the pass fails
/// as a whole and must be re-run; rankings already written stay in place.
pub async fn set_event_ranking<S>(store: &S, order: i32, category: &str) -> Result<RankingSummary>
where
    S: ScoringStore + ?Sized,
{
    let events = store.find_events(order, category).await?;

    if events.is_empty() {
        tracing::info!("No events with order {} in category {}", order, category);
        return Ok(RankingSummary {
            category: category.to_string(),
            updated: 0,
        });
    }

    let scored = classify(&events);
    let kinds: BTreeSet<_> = scored
        .iter()
        .map(|(_, p)| p)
        .filter(|p| p.is_recorded())
        .map(|p| p.kind())
        .collect();
    if kinds.len() > 1 {
        tracing::warn!(
            "Order {} in category {} mixes metrics {:?}; count-based results rank ahead of times",
            order,
            category,
            kinds
        );
    }
    let unrecorded = scored.iter().filter(|(_, p)| !p.is_recorded()).count();
    if unrecorded > 0 {
        tracing::info!(
            "{} of {} events without a result rank last",
            unrecorded,
            events.len()
        );
    }

    let ranked = rank_performances(scored);

    let outcome = write_all(
        ranked
            .iter()
            .map(|r| store.update_event_ranking(r.event_id, r.ranking)),
    )
    .await;

    if !outcome.is_success() {
        for failure in &outcome.failures {
            tracing::error!("Failed to persist event ranking: {}", failure);
        }
        return Err(StorageError::RankingPersistence {
            failed: outcome.failed(),
            total: outcome.total,
        });
    }

    tracing::info!(
        "Ranked {} events for order {} in category {}",
        outcome.total,
        order,
        category
    );

    Ok(RankingSummary {
        category: category.to_string(),
        updated: outcome.total,
    })
}
