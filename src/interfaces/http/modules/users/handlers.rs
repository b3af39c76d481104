//! User API handlers
//!
//! Thin wrappers delegating to `UserService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use super::dto::{ProfileQuery, SignupRequest, UserProfileResponse, UserResponse};
use crate::application::identity::UserService;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::{ApiError, ApiQuery, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::{AuthenticatedUser, TOKEN_COOKIE};

/// User handler state, concrete over `UserRepository` for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<UserRepository>>,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
}

fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie.set_max_age(time::Duration::seconds(max_age_secs));
    cookie
}

#[utoipa::path(
    post,
    path = "/v1/user/signup",
    tag = "Users",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created; session cookie set", body = UserResponse),
        (status = 400, description = "Validation error, duplicate email or unsupported city", body = ErrorBody),
        (status = 403, description = "Location outside Egypt", body = ErrorBody),
        (status = 502, description = "Geocoding provider failure", body = ErrorBody)
    )
)]
pub async fn signup(
    State(state): State<UserHandlerState>,
    cookies: Cookies,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let result = state.user_service.create(request.into()).await?;

    let max_age = state.user_service.jwt_config().expires_in_secs();
    cookies.add(session_cookie(result.token, max_age, state.secure_cookies));

    Ok((StatusCode::CREATED, Json(UserResponse::from(result.user))))
}

#[utoipa::path(
    get,
    path = "/v1/user",
    tag = "Users",
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    params(ProfileQuery),
    responses(
        (status = 200, description = "User profile", body = UserProfileResponse),
        (status = 400, description = "Malformed query", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_profile(
    State(state): State<UserHandlerState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiQuery(query): ApiQuery<ProfileQuery>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let user_id = query.user_id.unwrap_or(caller.user_id);
    let profile = state.user_service.find_one(user_id).await?;
    Ok(Json(profile.into()))
}
