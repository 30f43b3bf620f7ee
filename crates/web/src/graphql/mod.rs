//! GraphQL surface mirroring the REST API.
//!
//! Queries are public. Mutations need a caller verified from the bearer token,
//! which the HTTP handler attaches to the request data.

mod mutation;
mod query;

use async_graphql::{EmptySubscription, ErrorExtensions, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    http::HeaderMap,
    response::{Html, IntoResponse},
};
use storage::{Database, error::StorageError};

use crate::error::public_storage_message;
use crate::middleware::auth::{AuthUser, JwtAuth};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type LeaderboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const API_INFO: &str = "API responsible for a custom crossfit leaderboard";

pub fn build_schema(db: Database) -> LeaderboardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

pub async fn graphql_handler(
    Extension(schema): Extension<LeaderboardSchema>,
    Extension(auth): Extension<JwtAuth>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(user) = auth.authenticate(&headers) {
        request = request.data(user);
    }

    schema.execute(request).await.into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// The verified caller, or a `Not authenticated` error
fn require_user<'a>(ctx: &async_graphql::Context<'a>) -> async_graphql::Result<&'a AuthUser> {
    ctx.data_opt::<AuthUser>().ok_or_else(|| {
        async_graphql::Error::new("Not authenticated")
            .extend_with(|_, e| e.set("code", "UNAUTHENTICATED"))
    })
}

fn storage_error(error: StorageError) -> async_graphql::Error {
    let code = match &error {
        StorageError::NotFound => "NOT_FOUND",
        StorageError::UnknownTeam(_) => "BAD_USER_INPUT",
        StorageError::ConstraintViolation(_) => "CONFLICT",
        e if e.is_retryable() => "RETRY",
        _ => "INTERNAL_SERVER_ERROR",
    };

    async_graphql::Error::new(public_storage_message(&error))
        .extend_with(|_, e| e.set("code", code))
}

fn validation_error(error: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", "BAD_USER_INPUT"))
}
