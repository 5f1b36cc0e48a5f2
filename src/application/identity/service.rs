//! User service — application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DomainError, DomainResult, ListUsersDto, NewUser, User, UserRepositoryInterface,
};

/// User service — create, list and look up users.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and store a new user. Nothing is written when validation fails.
    pub async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        if let Err(e) = new_user.validate() {
            warn!(name = %new_user.name, error = %e, "Rejected user before storage");
            return Err(e);
        }

        let user = self.repo.create_user(new_user).await?;
        info!(user_id = user.id, name = %user.name, "User created");
        Ok(user)
    }

    pub async fn list_users(&self, dto: ListUsersDto) -> DomainResult<Vec<User>> {
        self.repo.list_users(dto).await
    }

    /// Get a single user by ID, failing with `NotFound` when absent.
    /// Ids outside the `i32` column range cannot be stored, so they are not found.
    pub async fn get_user_by_id(&self, id: i64) -> DomainResult<User> {
        let Ok(row_id) = i32::try_from(id) else {
            return Err(DomainError::not_found("User", "id", id));
        };
        self.repo
            .get_user_by_id(row_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", id))
    }
}
