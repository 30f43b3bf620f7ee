use axum::{
    Router, middleware,
    routing::{post, put},
};
use storage::Database;

use super::handlers::{create_event, delete_event, update_event};
use crate::middleware::auth::{JwtAuth, require_auth};

/// Nested under `/teams/{name}/events`; every route requires auth
pub fn routes(auth: JwtAuth) -> Router<Database> {
    Router::new()
        .route("/", post(create_event))
        .route("/{event_id}", put(update_event).delete(delete_event))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
