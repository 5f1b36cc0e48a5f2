//! Domain layer: the user record and the storage port it is persisted through.

pub mod user;

pub use user::{
    ListUsersDto, NewUser, User, UserRepositoryInterface, DEFAULT_LIMIT, DEFAULT_SKIP,
    EMAIL_MAX_LEN, NAME_MAX_LEN,
};

pub use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
