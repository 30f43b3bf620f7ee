use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::HiddenFlag;

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject, ToSchema)]
#[graphql(name = "Hidden")]
pub struct HiddenResponse {
    pub name: String,
    pub flag: bool,
}

impl From<HiddenFlag> for HiddenResponse {
    fn from(hidden: HiddenFlag) -> Self {
        Self {
            name: hidden.name,
            flag: hidden.flag,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHiddenRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[serde(default)]
    pub flag: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateHiddenRequest {
    pub flag: bool,
}
