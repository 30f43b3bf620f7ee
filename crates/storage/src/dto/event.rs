use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Event, parse_finish_time};

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject, ToSchema)]
#[graphql(name = "Event")]
pub struct EventResponse {
    #[graphql(name = "id")]
    pub event_id: Uuid,
    pub team_id: Uuid,
    pub order: i32,
    pub time: Option<String>,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    pub ranking: Option<i32>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            team_id: event.team_id,
            order: event.order,
            time: event.time,
            reps: event.reps,
            weight: event.weight,
            ranking: event.ranking,
        }
    }
}

/// Request payload for opening an event for a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(range(min = 1, message = "Order must be a positive number"))]
    pub order: i32,
}

/// Request payload for recording a result on an event.
///
/// Supplying a metric replaces whatever metric the event held before.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(range(min = 1, message = "Order must be a positive number"))]
    pub order: Option<i32>,

    #[validate(custom(function = "validate_finish_time"))]
    pub time: Option<String>,

    #[validate(range(min = 0, message = "Reps cannot be negative"))]
    pub reps: Option<i32>,

    #[validate(range(min = 0, message = "Weight cannot be negative"))]
    pub weight: Option<i32>,
}

impl UpdateEventRequest {
    pub fn has_metric(&self) -> bool {
        self.time.is_some() || self.reps.is_some() || self.weight.is_some()
    }

    /// Metric columns after applying this update to `existing`.
    ///
    /// A supplied metric clears the other two; without one the event keeps
    /// what it had.
    pub fn resolved_metrics<'a>(
        &'a self,
        existing: &'a Event,
    ) -> (Option<&'a String>, Option<i32>, Option<i32>) {
        if self.has_metric() {
            (self.time.as_ref(), self.reps, self.weight)
        } else {
            (existing.time.as_ref(), existing.reps, existing.weight)
        }
    }

    /// Additional validation that requires multiple fields
    pub fn validate_metrics(&self) -> Result<(), &'static str> {
        let supplied = [
            self.time.is_some(),
            self.reps.is_some(),
            self.weight.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();

        if supplied > 1 {
            return Err("An event records only one of time, reps or weight");
        }

        Ok(())
    }
}

/// Width of the `finish_time` column
pub const MAX_FINISH_TIME_LEN: usize = 16;

fn validate_finish_time(time: &str) -> Result<(), validator::ValidationError> {
    if time.len() > MAX_FINISH_TIME_LEN {
        return Err(validator::ValidationError::new("finish_time_too_long"));
    }

    let well_formed = time.split_once(':').is_some_and(|(minutes, seconds)| {
        !minutes.is_empty()
            && minutes.chars().all(|c| c.is_ascii_digit())
            && seconds.len() == 2
            && seconds.chars().all(|c| c.is_ascii_digit())
            && seconds < "60"
    });

    if well_formed && parse_finish_time(time).is_some() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_finish_time"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_time_format() {
        assert!(validate_finish_time("1:30").is_ok());
        assert!(validate_finish_time("12:05").is_ok());
        assert!(validate_finish_time("0:00").is_ok());

        assert!(validate_finish_time("1:3").is_err());
        assert!(validate_finish_time("1:75").is_err());
        assert!(validate_finish_time("90").is_err());
        assert!(validate_finish_time(":30").is_err());
        assert!(validate_finish_time("-1:30").is_err());
    }

    #[test]
    fn test_finish_time_fits_column() {
        assert!(validate_finish_time("00000000000001:00").is_err());
        assert!(validate_finish_time("00000000000000001:00").is_err());
        assert!(validate_finish_time("0000000000001:00").is_ok());
    }

    #[test]
    fn test_single_metric_rule() {
        let time_only = UpdateEventRequest {
            time: Some("2:00".to_string()),
            ..Default::default()
        };
        assert!(time_only.validate_metrics().is_ok());
        assert!(time_only.has_metric());

        let order_only = UpdateEventRequest {
            order: Some(2),
            ..Default::default()
        };
        assert!(order_only.validate_metrics().is_ok());
        assert!(!order_only.has_metric());

        let both = UpdateEventRequest {
            reps: Some(100),
            weight: Some(60),
            ..Default::default()
        };
        assert!(both.validate_metrics().is_err());
    }

    fn recorded(time: Option<&str>, reps: Option<i32>, weight: Option<i32>) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            order: 1,
            time: time.map(str::to_string),
            reps,
            weight,
            ranking: Some(2),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_time_replaces_reps() {
        let existing = recorded(None, Some(120), None);
        let req = UpdateEventRequest {
            time: Some("4:10".to_string()),
            ..Default::default()
        };

        let (time, reps, weight) = req.resolved_metrics(&existing);
        assert_eq!(time.map(String::as_str), Some("4:10"));
        assert_eq!(reps, None);
        assert_eq!(weight, None);
    }

    #[test]
    fn test_order_only_keeps_metric() {
        let existing = recorded(None, None, Some(95));
        let req = UpdateEventRequest {
            order: Some(3),
            ..Default::default()
        };

        assert_eq!(req.resolved_metrics(&existing), (None, None, Some(95)));
    }

    #[test]
    fn test_weight_replaces_time() {
        let existing = recorded(Some("2:45"), None, None);
        let req = UpdateEventRequest {
            weight: Some(140),
            ..Default::default()
        };

        assert_eq!(req.resolved_metrics(&existing), (None, None, Some(140)));
    }

    #[test]
    fn test_negative_counts_rejected() {
        let req = UpdateEventRequest {
            reps: Some(-4),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
