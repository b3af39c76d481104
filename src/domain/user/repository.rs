use async_trait::async_trait;

use super::{CreateUserDto, User, UserProfile};
use crate::domain::DomainResult;

/// Signs a session token for a freshly inserted user.
pub type TokenIssuer<'a> = &'a (dyn Fn(&User) -> DomainResult<String> + Send + Sync);

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn find_profile(&self, id: i32) -> DomainResult<Option<UserProfile>>;

    /// Insert the user and issue its token as one unit of work.
    ///
    /// The row is committed only after `issue_token` succeeds; any failure
    /// leaves no user behind. A duplicate email yields `DomainError::EmailTaken`.
    async fn create_user_atomic(
        &self,
        dto: CreateUserDto,
        issue_token: TokenIssuer<'_>,
    ) -> DomainResult<(User, String)>;
}
