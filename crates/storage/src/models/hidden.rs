use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Named boolean toggle used by the front end to hide or reveal results
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HiddenFlag {
    pub name: String,
    pub flag: bool,
}
