//! User service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    validate_location, CreateUserDto, DomainError, DomainResult, ReverseGeocoder, User,
    UserProfile, UserRepositoryInterface,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};

/// Signup data as accepted from a client
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A committed user together with its session token
#[derive(Debug, Clone)]
pub struct SignupResult {
    pub user: User,
    pub token: String,
}

/// Orchestrates signup and profile use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    geocoder: Arc<dyn ReverseGeocoder>,
    jwt_config: JwtConfig,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, geocoder: Arc<dyn ReverseGeocoder>, jwt_config: JwtConfig) -> Self {
        Self {
            repo,
            geocoder,
            jwt_config,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Public profile (name, email, city) of a user.
    pub async fn find_one(&self, id: i32) -> DomainResult<UserProfile> {
        self.repo
            .find_profile(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })
    }

    // ── Signup ──────────────────────────────────────────────────

    /// Register a user located in a supported Egyptian city and issue a token.
    ///
    /// Nothing is persisted unless every step succeeds.
    pub async fn create(&self, input: SignupInput) -> DomainResult<SignupResult> {
        let email = input.email.trim().to_lowercase();
        let name = input.name.trim().to_string();

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailTaken);
        }

        let location = self
            .geocoder
            .reverse_geocode(input.latitude, input.longitude)
            .await?;

        let city = validate_location(&location).map_err(|e| {
            warn!(
                %email,
                country = ?location.country,
                city = ?location.city,
                "Signup rejected by location rules"
            );
            e
        })?;

        let dto = CreateUserDto {
            name,
            email,
            latitude: input.latitude,
            longitude: input.longitude,
            city: Some(city),
        };

        let jwt_config = &self.jwt_config;
        let issue = move |user: &User| -> DomainResult<String> {
            create_token(user.id, jwt_config).map_err(|e| DomainError::Token(e.to_string()))
        };

        let (user, token) = self.repo.create_user_atomic(dto, &issue).await?;

        info!(user_id = user.id, email = %user.email, city = ?user.city, "New user registered");
        Ok(SignupResult { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationInfo;
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::UserRepository;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use crate::support::errors::GeocodingError;
    use async_trait::async_trait;
    use sea_orm_migration::MigratorTrait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGeocoder {
        result: Result<LocationInfo, GeocodingError>,
        calls: AtomicUsize,
    }

    impl StubGeocoder {
        fn resolving(country: &str, city: &str) -> Self {
            Self {
                result: Ok(LocationInfo {
                    address: None,
                    city: Some(city.into()),
                    country: Some(country.into()),
                    country_code: None,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(err: GeocodingError) -> Self {
            Self {
                result: Err(err),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ReverseGeocoder for StubGeocoder {
        async fn reverse_geocode(&self, _: f64, _: f64) -> Result<LocationInfo, GeocodingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "shezlong-task".into(),
            expiration_hours: 2,
            issuer: "mindwell".into(),
        }
    }

    async fn service(geocoder: Arc<StubGeocoder>) -> UserService<UserRepository> {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        UserService::new(Arc::new(UserRepository::new(db)), geocoder, jwt())
    }

    fn input(email: &str) -> SignupInput {
        SignupInput {
            name: "test".into(),
            email: email.into(),
            latitude: 29.970089,
            longitude: 31.243959,
        }
    }

    #[tokio::test]
    async fn create_registers_user_and_signs_token() {
        let geo = Arc::new(StubGeocoder::resolving("Egypt", "El Maadi"));
        let svc = service(geo.clone()).await;

        let result = svc.create(input("test@test.com")).await.unwrap();

        assert_eq!(result.user.email, "test@test.com");
        assert_eq!(result.user.city.as_deref(), Some("El Maadi"));
        assert_eq!(result.user.latitude, 29.970089);
        assert_eq!(geo.calls.load(Ordering::SeqCst), 1);

        let claims = verify_token(&result.token, &jwt()).unwrap();
        assert_eq!(claims.user_id, result.user.id);
    }

    #[tokio::test]
    async fn duplicate_email_skips_geocoding() {
        let geo = Arc::new(StubGeocoder::resolving("Egypt", "Cairo"));
        let svc = service(geo.clone()).await;

        svc.create(input("test@test.com")).await.unwrap();
        let err = svc.create(input(" TEST@test.com ")).await.unwrap_err();

        assert!(matches!(err, DomainError::EmailTaken));
        assert_eq!(err.to_string(), "Email already exists");
        assert_eq!(geo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn location_outside_egypt_is_forbidden() {
        let svc = service(Arc::new(StubGeocoder::resolving("USA", "New York"))).await;

        let err = svc.create(input("test@test.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::LocationOutsideEgypt));
        assert_eq!(err.to_string(), "User location must be within Egypt.");
    }

    #[tokio::test]
    async fn unsupported_city_is_rejected_and_not_saved() {
        let svc = service(Arc::new(StubGeocoder::resolving("Egypt", "Nowhere"))).await;

        let err = svc.create(input("test@test.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedCity(_)));
        assert!(svc.repo.find_by_email("test@test.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn geocoding_failure_propagates() {
        let svc = service(Arc::new(StubGeocoder::failing(GeocodingError::Upstream {
            status: 500,
        })))
        .await;

        let err = svc.create(input("test@test.com")).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Geocoding(GeocodingError::Upstream { status: 500 })
        ));
    }

    #[tokio::test]
    async fn find_one_returns_profile() {
        let svc = service(Arc::new(StubGeocoder::resolving("Egypt", "El Maadi"))).await;
        let created = svc.create(input("test@test.com")).await.unwrap();

        let profile = svc.find_one(created.user.id).await.unwrap();
        assert_eq!(profile.name, "test");
        assert_eq!(profile.email, "test@test.com");
        assert_eq!(profile.city.as_deref(), Some("El Maadi"));
    }

    #[tokio::test]
    async fn find_one_missing_user() {
        let svc = service(Arc::new(StubGeocoder::resolving("Egypt", "Cairo"))).await;

        let err = svc.find_one(1).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "User not found");
    }
}
