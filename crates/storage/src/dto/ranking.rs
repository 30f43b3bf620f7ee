use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::services::RankingSummary;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetEventRankingRequest {
    #[validate(range(min = 1, message = "Order must be a positive number"))]
    pub order: i32,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetTeamsScoreRequest {
    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankingUpdateResponse {
    pub message: String,
    /// Number of events or teams whose derived value was rewritten
    pub updated: usize,
}

impl From<RankingSummary> for RankingUpdateResponse {
    fn from(summary: RankingSummary) -> Self {
        Self {
            message: summary.message(),
            updated: summary.updated,
        }
    }
}
