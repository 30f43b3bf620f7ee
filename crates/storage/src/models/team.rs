use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub name: String,
    pub category: String,
    pub members: Vec<String>,
    /// Sum of event rankings, lower is better. NULL until scores are computed.
    pub final_score: Option<i32>,
    pub created_at: NaiveDateTime,
}
