//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{
    ListUsersDto, NewUser, User, DEFAULT_LIMIT, DEFAULT_SKIP, EMAIL_MAX_LEN, NAME_MAX_LEN,
};

// validator's `length` attribute requires `u64` bounds.
const NAME_MAX_LEN_U64: u64 = NAME_MAX_LEN as u64;
const EMAIL_MAX_LEN_U64: u64 = EMAIL_MAX_LEN as u64;

/// User API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Unique user name, at most `NAME_MAX_LEN` characters
    #[validate(length(max = NAME_MAX_LEN_U64, message = "Name is too long"))]
    pub name: String,
    /// Unique email address, must contain `@`
    #[validate(
        contains(pattern = "@", message = "Email must contain @ symbol"),
        length(max = EMAIL_MAX_LEN_U64, message = "Email is too long")
    )]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        NewUser::new(r.name, r.email)
    }
}

/// Lookup-by-id request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GetUserByIdRequest {
    pub user_id: i64,
}

/// List users query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Number of users to skip
    #[serde(default = "default_skip")]
    pub skip: u64,
    /// Maximum number of users to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_skip() -> u64 {
    DEFAULT_SKIP
}
fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl From<ListUsersParams> for ListUsersDto {
    fn from(p: ListUsersParams) -> Self {
        Self {
            skip: p.skip,
            limit: p.limit,
        }
    }
}
