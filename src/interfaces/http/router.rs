//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode, Uri},
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_cookies::CookieManagerLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::identity::UserService;
use crate::config::CorsConfig;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::{ApiError, ErrorBody};
use crate::interfaces::http::middleware::{auth_middleware, cache_control_middleware, AuthState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{health, users};

/// Everything the HTTP layer needs, assembled by the server.
#[derive(Clone)]
pub struct ApiState {
    pub user_service: Arc<UserService<UserRepository>>,
    pub db: DatabaseConnection,
    pub jwt_config: JwtConfig,
    pub cors: CorsConfig,
    pub request_timeout: Duration,
    /// Mark the session cookie `Secure` (production)
    pub secure_cookies: bool,
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::hello,
        health::handlers::health_check,
        users::handlers::signup,
        users::handlers::get_profile,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            users::SignupRequest,
            users::UserResponse,
            users::UserProfileResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Users", description = "Signup and profile lookup"),
    ),
    info(
        title = "MindWell API",
        version = "1.0.0",
        description = "The MindWell API description"
    )
)]
pub struct ApiDoc;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}

/// Create the API router with all routes
pub fn create_api_router(state: ApiState) -> Router {
    let auth_state = AuthState {
        jwt_config: state.jwt_config.clone(),
    };

    let user_state = users::UserHandlerState {
        user_service: state.user_service.clone(),
        secure_cookies: state.secure_cookies,
    };

    let health_routes = Router::new()
        .route("/v1", get(health::hello))
        .route("/v1/health", get(health::health_check))
        .with_state(health::HealthState {
            db: state.db.clone(),
        });

    // Public
    let signup_routes = Router::new()
        .route("/v1/user/signup", post(users::signup))
        .with_state(user_state.clone());

    // Guarded
    let profile_routes = Router::new()
        .route("/v1/user", get(users::get_profile))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(user_state);

    Router::new()
        .merge(health_routes)
        .merge(signup_routes)
        .merge(profile_routes)
        .merge(SwaggerUi::new("/api").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(middleware::from_fn(cache_control_middleware))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.request_timeout,
        ))
        .layer(CookieManagerLayer::new())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&state.cors))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_routes_and_schemes() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "MindWell API");
        assert!(doc.paths.paths.contains_key("/v1/user/signup"));
        assert!(doc.paths.paths.contains_key("/v1/user"));

        let schemes = &doc.components.as_ref().unwrap().security_schemes;
        assert!(schemes.contains_key("bearer_auth"));
        assert!(schemes.contains_key("cookie_auth"));
    }
}
