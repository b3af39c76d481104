use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QuerySelect, Set, SqlErr, TransactionTrait,
};
use tracing::{debug, warn};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, TokenIssuer, User, UserProfile,
    UserRepositoryInterface,
};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        latitude: model.latitude,
        longitude: model.longitude,
        city: model.city,
        created_at: model.created_at,
    }
}

#[derive(Debug, FromQueryResult)]
struct ProfileRow {
    name: String,
    email: String,
    city: Option<String>,
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_profile(&self, id: i32) -> DomainResult<Option<UserProfile>> {
        let row = user::Entity::find_by_id(id)
            .select_only()
            .columns([user::Column::Name, user::Column::Email, user::Column::City])
            .into_model::<ProfileRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(|r| UserProfile {
            name: r.name,
            email: r.email,
            city: r.city,
        }))
    }

    async fn create_user_atomic(
        &self,
        dto: CreateUserDto,
        issue_token: TokenIssuer<'_>,
    ) -> DomainResult<(User, String)> {
        let txn = self.db.begin().await?;

        let new_user = user::ActiveModel {
            name: Set(dto.name),
            email: Set(dto.email),
            latitude: Set(dto.latitude),
            longitude: Set(dto.longitude),
            city: Set(dto.city),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let inserted = match new_user.insert(&txn).await {
            Ok(model) => user_model_to_domain(model),
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(error = %rb, "Rollback after failed insert did not complete");
                }
                return Err(if is_unique_violation(&e) {
                    DomainError::EmailTaken
                } else {
                    DomainError::from(e)
                });
            }
        };

        let token = match issue_token(&inserted) {
            Ok(token) => token,
            Err(e) => {
                debug!(user_id = inserted.id, "Token issuance failed, rolling back insert");
                txn.rollback().await?;
                return Err(e);
            }
        };

        txn.commit().await?;
        Ok((inserted, token))
    }
}
