//! User domain model

use serde::{Deserialize, Serialize};

/// Maximum length of a user name, matching the `users.name` column.
pub const NAME_MAX_LEN: usize = 50;
/// Maximum length of an email address, matching the `users.email` column.
pub const EMAIL_MAX_LEN: usize = 100;

/// A stored user. Append-only: once created it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}
