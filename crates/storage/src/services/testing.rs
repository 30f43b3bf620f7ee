//! In-memory [`ScoringStore`] for exercising the ranking and scoring passes.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use super::store::{ScoringStore, TeamRankings};
use crate::error::{Result, StorageError};
use crate::models::{Event, Team};

#[derive(Default)]
pub struct MemoryStore {
    teams: Mutex<Vec<Team>>,
    events: Mutex<Vec<Event>>,
    failing: Mutex<HashSet<Uuid>>,
    fail_reads: Mutex<bool>,
    writes: Mutex<usize>,
}

pub fn team(name: &str, category: &str) -> Team {
    Team {
        team_id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        members: vec![],
        final_score: None,
        created_at: NaiveDateTime::default(),
    }
}

pub fn event(
    team_id: Uuid,
    order: i32,
    time: Option<&str>,
    reps: Option<i32>,
    weight: Option<i32>,
) -> Event {
    Event {
        event_id: Uuid::new_v4(),
        team_id,
        order,
        time: time.map(str::to_string),
        reps,
        weight,
        ranking: None,
        created_at: NaiveDateTime::default(),
    }
}

impl MemoryStore {
    pub fn add_team(&self, team: Team) -> Uuid {
        let id = team.team_id;
        self.teams.lock().unwrap().push(team);
        id
    }

    pub fn add_event(&self, event: Event) -> Uuid {
        let id = event.event_id;
        self.events.lock().unwrap().push(event);
        id
    }

    pub fn team(&self, team_id: Uuid) -> Team {
        self.teams
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.team_id == team_id)
            .cloned()
            .unwrap()
    }

    pub fn event(&self, event_id: Uuid) -> Event {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.event_id == event_id)
            .cloned()
            .unwrap()
    }

    /// Writes to this team or event id fail
    pub fn fail_writes_for(&self, id: Uuid) {
        self.failing.lock().unwrap().insert(id);
    }

    pub fn fail_reads(&self) {
        *self.fail_reads.lock().unwrap() = true;
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn check_read(&self) -> Result<()> {
        if *self.fail_reads.lock().unwrap() {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn check_write(&self, id: Uuid) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        if self.failing.lock().unwrap().contains(&id) {
            return Err(StorageError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn category_of(&self, team_id: Uuid) -> Option<String> {
        self.teams
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.team_id == team_id)
            .map(|t| t.category.clone())
    }
}

#[async_trait]
impl ScoringStore for MemoryStore {
    async fn find_events(&self, order: i32, category: &str) -> Result<Vec<Event>> {
        self.check_read()?;
        let events = self.events.lock().unwrap().clone();
        Ok(events
            .into_iter()
            .filter(|e| {
                e.order == order && self.category_of(e.team_id).as_deref() == Some(category)
            })
            .collect())
    }

    async fn find_team_rankings(&self, category: &str) -> Result<Vec<TeamRankings>> {
        self.check_read()?;
        let teams = self.teams.lock().unwrap().clone();
        let events = self.events.lock().unwrap().clone();
        Ok(teams
            .into_iter()
            .filter(|t| t.category == category)
            .map(|t| TeamRankings {
                rankings: events
                    .iter()
                    .filter(|e| e.team_id == t.team_id)
                    .map(|e| e.ranking)
                    .collect(),
                team_id: t.team_id,
                name: t.name,
            })
            .collect())
    }

    async fn update_event_ranking(&self, event_id: Uuid, ranking: i32) -> Result<()> {
        self.check_write(event_id)?;
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.event_id == event_id)
            .ok_or(StorageError::NotFound)?;
        event.ranking = Some(ranking);
        Ok(())
    }

    async fn update_team_score(&self, team_id: Uuid, final_score: i32) -> Result<()> {
        self.check_write(team_id)?;
        let mut teams = self.teams.lock().unwrap();
        let team = teams
            .iter_mut()
            .find(|t| t.team_id == team_id)
            .ok_or(StorageError::NotFound)?;
        team.final_score = Some(final_score);
        Ok(())
    }
}
