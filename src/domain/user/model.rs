use chrono::{DateTime, Utc};

/// A registered MindWell user
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public subset of a user returned by profile lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub city: Option<String>,
}
