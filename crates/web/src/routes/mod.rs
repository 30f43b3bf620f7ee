use axum::{Extension, Json, Router, routing::get};
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::features::{hidden, rankings, teams};
use crate::graphql;
use crate::middleware::auth::JwtAuth;

#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Service description", body = String)
    ),
    tag = "info"
)]
pub async fn get_info() -> Json<&'static str> {
    Json(graphql::API_INFO)
}

fn api_routes(auth: JwtAuth) -> Router<Database> {
    Router::new()
        .route("/info", get(get_info))
        .nest("/teams", teams::routes::routes(auth.clone()))
        .nest("/rankings", rankings::routes::routes(auth.clone()))
        .route(
            "/leaderboard/{category}",
            get(rankings::handlers::get_leaderboard),
        )
        .nest("/hidden", hidden::routes::routes(auth))
}

/// REST under `/api`, GraphQL at `/graphql`
pub fn router(db: Database, auth: JwtAuth) -> Router {
    let schema = graphql::build_schema(db.clone());

    Router::new()
        .nest("/api", api_routes(auth.clone()))
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .layer(Extension(schema))
        .layer(Extension(auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
