//! User aggregate
//!
//! Contains the User record, its input DTOs and the repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_list;

pub use model::{User, EMAIL_MAX_LEN, NAME_MAX_LEN};

pub use dto_create::NewUser;
pub use dto_list::{ListUsersDto, DEFAULT_LIMIT, DEFAULT_SKIP};

pub use repository::UserRepositoryInterface;
