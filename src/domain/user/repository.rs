use async_trait::async_trait;

use super::{ListUsersDto, NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Insert a row and return it with its assigned id.
    ///
    /// Any write failure is reported as `DomainError::InvalidOrDuplicate`
    /// after the enclosing transaction has been rolled back.
    async fn create_user(&self, user: NewUser) -> DomainResult<User>;

    async fn list_users(&self, dto: ListUsersDto) -> DomainResult<Vec<User>>;
    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>>;
}
