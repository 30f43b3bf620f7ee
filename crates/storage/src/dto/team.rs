use std::collections::HashMap;

use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::event::EventResponse;
use crate::models::{Event, Team};

/// Team with the events it owns
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject, ToSchema)]
#[graphql(name = "Team")]
pub struct TeamResponse {
    #[graphql(name = "id")]
    pub team_id: Uuid,
    pub name: String,
    pub category: String,
    pub members: Vec<String>,
    pub final_score: Option<i32>,
    pub created_at: NaiveDateTime,
    pub events: Vec<EventResponse>,
}

impl TeamResponse {
    pub fn new(team: Team, events: Vec<Event>) -> Self {
        Self {
            team_id: team.team_id,
            name: team.name,
            category: team.category,
            members: team.members,
            final_score: team.final_score,
            created_at: team.created_at,
            events: events.into_iter().map(EventResponse::from).collect(),
        }
    }

    /// Attaches each event to its owning team, preserving the order of `teams`
    pub fn assemble(teams: Vec<Team>, events: Vec<Event>) -> Vec<Self> {
        let mut by_team: HashMap<Uuid, Vec<Event>> = HashMap::new();
        for event in events {
            by_team.entry(event.team_id).or_default().push(event);
        }

        teams
            .into_iter()
            .map(|team| {
                let events = by_team.remove(&team.team_id).unwrap_or_default();
                Self::new(team, events)
            })
            .collect()
    }
}

/// Request payload for registering a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Category must be between 1 and 100 characters"
    ))]
    pub category: String,

    #[serde(default)]
    #[validate(custom(function = "validate_members"))]
    pub members: Vec<String>,
}

/// Request payload for updating a team, addressed by its current name
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    /// New name for the team
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    #[validate(custom(function = "validate_members"))]
    pub members: Option<Vec<String>>,
}

fn validate_members(members: &[String]) -> Result<(), validator::ValidationError> {
    if members
        .iter()
        .all(|m| !m.trim().is_empty() && m.len() <= 255)
    {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_member_name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> Team {
        Team {
            team_id: Uuid::new_v4(),
            name: name.to_string(),
            category: "RX".to_string(),
            members: vec![],
            final_score: None,
            created_at: NaiveDateTime::default(),
        }
    }

    fn event(team_id: Uuid, order: i32) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            team_id,
            order,
            time: None,
            reps: Some(10),
            weight: None,
            ranking: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_assemble_groups_events_by_team() {
        let alpha = team("alpha");
        let bravo = team("bravo");
        let events = vec![
            event(bravo.team_id, 1),
            event(alpha.team_id, 1),
            event(bravo.team_id, 2),
        ];

        let teams = TeamResponse::assemble(vec![alpha, bravo], events);

        assert_eq!(teams[0].name, "alpha");
        assert_eq!(teams[0].events.len(), 1);
        assert_eq!(teams[1].name, "bravo");
        let orders: Vec<i32> = teams[1].events.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_team_without_events_gets_empty_list() {
        let teams = TeamResponse::assemble(vec![team("solo")], vec![]);
        assert!(teams[0].events.is_empty());
    }

    #[test]
    fn test_create_request_validation() {
        let ok = CreateTeamRequest {
            name: "Maral".to_string(),
            category: "RX".to_string(),
            members: vec!["Ana".to_string(), "Bo".to_string()],
        };
        assert!(ok.validate().is_ok());

        let blank_member = CreateTeamRequest {
            members: vec!["  ".to_string()],
            ..ok.clone()
        };
        assert!(blank_member.validate().is_err());

        let no_name = CreateTeamRequest {
            name: String::new(),
            ..ok
        };
        assert!(no_name.validate().is_err());
    }
}
