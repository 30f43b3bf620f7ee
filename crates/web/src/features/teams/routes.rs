use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{create_team, delete_team, get_team, list_teams, update_team};
use crate::features::events;
use crate::middleware::auth::{JwtAuth, require_auth};

pub fn routes(auth: JwtAuth) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_team))
        .route("/{name}", put(update_team).delete(delete_team))
        .route_layer(middleware::from_fn_with_state(auth.clone(), require_auth));

    Router::new()
        .route("/", get(list_teams))
        .route("/{name}", get(get_team))
        .merge(protected)
        .nest("/{name}/events", events::routes::routes(auth))
}
