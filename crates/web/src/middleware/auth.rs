//! Bearer JWT authentication.
//!
//! Tokens are issued elsewhere and signed with the shared `APP_SECRET`
//! (HS256). They carry the caller id in a `userId` claim; `exp` is enforced
//! when present.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::error::WebError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

/// Caller identity verified from a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}

#[derive(Clone)]
pub struct JwtAuth {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<AuthUser, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;
        Ok(AuthUser {
            user_id: data.claims.user_id,
        })
    }

    /// Verified caller from the `Authorization` header, if any
    pub fn authenticate(&self, headers: &HeaderMap) -> Option<AuthUser> {
        let token = bearer_token(headers)?;
        match self.verify(token) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Rejected bearer token: {}", e);
                None
            }
        }
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let user = auth
        .authenticate(request.headers())
        .ok_or(WebError::Unauthorized)?;

    tracing::debug!("Authenticated request from user {}", user.user_id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{Extension, Router, body::Body, http::StatusCode, middleware, routing::get};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use tower::ServiceExt;

    pub const SECRET: &str = "test-secret";

    pub fn token_for(user_id: &str, secret: &str) -> String {
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: None,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    async fn whoami(Extension(user): Extension<AuthUser>) -> String {
        user.user_id
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(whoami))
            .route_layer(middleware::from_fn_with_state(
                JwtAuth::new(SECRET),
                require_auth,
            ))
    }

    fn request(authorization: Option<String>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_verify_accepts_token_without_expiry() {
        let auth = JwtAuth::new(SECRET);
        let user = auth.verify(&token_for("user-1", SECRET)).unwrap();
        assert_eq!(user.user_id, "user-1");
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let auth = JwtAuth::new(SECRET);
        assert!(auth.verify(&token_for("user-1", "other")).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let claims = Claims {
            user_id: "user-1".to_string(),
            exp: Some(1),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(JwtAuth::new(SECRET).verify(&token).is_err());
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, "Bearer abc.def".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let response = app()
            .oneshot(request(Some("Bearer garbage".to_string())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let token = token_for("coach", SECRET);
        let response = app()
            .oneshot(request(Some(format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"coach");
    }
}
