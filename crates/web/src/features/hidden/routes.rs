use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{create_hidden, get_hidden, update_hidden};
use crate::middleware::auth::{JwtAuth, require_auth};

pub fn routes(auth: JwtAuth) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_hidden))
        .route("/{name}", put(update_hidden))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/{name}", get(get_hidden))
        .merge(protected)
}
