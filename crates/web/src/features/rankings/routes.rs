use axum::{Router, middleware, routing::post};
use storage::Database;

use super::handlers::{set_event_ranking, set_teams_score};
use crate::middleware::auth::{JwtAuth, require_auth};

pub fn routes(auth: JwtAuth) -> Router<Database> {
    Router::new()
        .route("/events", post(set_event_ranking))
        .route("/scores", post(set_teams_score))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
