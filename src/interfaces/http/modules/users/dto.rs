//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::application::SignupInput;
use crate::domain::{User, UserProfile};

/// Signup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Mona Hassan")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "mona@example.com")]
    pub email: String,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    #[schema(example = 30.0444)]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    #[schema(example = 31.2357)]
    pub longitude: f64,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Name must not be empty".into()));
    }
    Ok(())
}

impl From<SignupRequest> for SignupInput {
    fn from(r: SignupRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

/// Full user representation returned by signup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            latitude: u.latitude,
            longitude: u.longitude,
            city: u.city,
            created_at: u.created_at,
        }
    }
}

/// Public profile
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserProfileResponse {
    pub name: String,
    pub email: String,
    pub city: Option<String>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            name: p.name,
            email: p.email,
            city: p.city,
        }
    }
}

/// Profile lookup query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProfileQuery {
    /// User to look up; defaults to the caller
    pub user_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(lat: f64, lon: f64, email: &str) -> SignupRequest {
        SignupRequest {
            name: "Mona".into(),
            email: email.into(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(request(30.04, 31.23, "mona@example.com").validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let errors = request(91.0, 181.0, "mona@example.com")
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("longitude"));
    }

    #[test]
    fn rejects_blank_name() {
        let mut req = request(30.0, 31.0, "mona@example.com");
        req.name = " \t ".into();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn rejects_invalid_email() {
        let errors = request(30.0, 31.0, "not-an-email").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn unknown_fields_fail_to_deserialize() {
        let raw = r#"{"name":"a","email":"a@b.co","latitude":1,"longitude":2,"role":"admin"}"#;
        assert!(serde_json::from_str::<SignupRequest>(raw).is_err());
    }
}
