use sqlx::PgPool;
use storage::{
    dto::hidden::{CreateHiddenRequest, HiddenResponse},
    error::Result,
    repository::hidden::HiddenRepository,
};

pub async fn get_hidden(pool: &PgPool, name: &str) -> Result<HiddenResponse> {
    let hidden = HiddenRepository::new(pool).find_by_name(name).await?;
    Ok(HiddenResponse::from(hidden))
}

pub async fn create_hidden(pool: &PgPool, request: &CreateHiddenRequest) -> Result<HiddenResponse> {
    let hidden = HiddenRepository::new(pool)
        .create(&request.name, request.flag)
        .await?;
    Ok(HiddenResponse::from(hidden))
}

pub async fn update_hidden(pool: &PgPool, name: &str, flag: bool) -> Result<HiddenResponse> {
    let hidden = HiddenRepository::new(pool).update_flag(name, flag).await?;
    tracing::info!("Hidden flag {} set to {}", hidden.name, hidden.flag);
    Ok(HiddenResponse::from(hidden))
}
