//! Authentication and response-header middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_cookies::Cookies;
use tracing::debug;

use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};
use crate::interfaces::http::common::ApiError;
use crate::support::errors::AuthError;

/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE: &str = "token";

/// Authentication state containing the JWT config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Identity of the caller, inserted into request extensions by
/// [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

fn bearer_token(request: &Request<Body>) -> Option<String> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

fn cookie_token(request: &Request<Body>) -> Option<String> {
    request
        .extensions()
        .get::<Cookies>()?
        .get(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Token from the `Authorization: Bearer` header, falling back to the
/// `token` cookie.
pub fn extract_token(request: &Request<Body>) -> Option<String> {
    bearer_token(request).or_else(|| cookie_token(request))
}

/// JWT authentication guard
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_token(&request) else {
        return auth_error_response(AuthError::MissingToken);
    };

    match verify_token(&token, &auth_state.jwt_config) {
        Ok(claims) => {
            let user = AuthenticatedUser::from_claims(&claims);
            request.extensions_mut().insert(claims);
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            debug!(error = %e, "Rejected bearer token");
            auth_error_response(AuthError::InvalidToken)
        }
    }
}

fn auth_error_response(error: AuthError) -> Response {
    ApiError::from(error).into_response()
}

/// Sets `Cache-Control` on responses that did not choose their own:
/// successful GETs are cacheable for five minutes, everything else is
/// `no-store`.
pub async fn cache_control_middleware(request: Request<Body>, next: Next) -> Response {
    let is_get = request.method() == Method::GET;

    let mut response = next.run(request).await;
    let value = if is_get && response.status().is_success() {
        HeaderValue::from_static("public, max-age=300")
    } else {
        HeaderValue::from_static("no-store")
    };
    response
        .headers_mut()
        .entry(header::CACHE_CONTROL)
        .or_insert(value);
    response
}
