use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Performance;

/// One exercise result recorded by a team.
///
/// At most one of `time`, `reps` and `weight` is set. `ranking` is derived and
/// overwritten every time the (order, category) group is ranked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub team_id: Uuid,
    #[sqlx(rename = "event_order")]
    pub order: i32,
    /// Finish time formatted as `m:ss`
    #[sqlx(rename = "finish_time")]
    pub time: Option<String>,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    pub ranking: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl Event {
    pub fn performance(&self) -> Performance {
        Performance::from_metrics(self.time.as_deref(), self.reps, self.weight)
    }
}
