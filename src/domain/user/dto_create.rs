use super::model::{EMAIL_MAX_LEN, NAME_MAX_LEN};
use crate::domain::{DomainError, DomainResult};

/// A user that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Structural checks that must pass before anything reaches storage.
    /// Uniqueness is left to the store's constraints.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.email.contains('@') {
            return Err(DomainError::Validation(
                "Email must contain @ symbol".into(),
            ));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "Name must be at most {} characters",
                NAME_MAX_LEN
            )));
        }
        if self.email.chars().count() > EMAIL_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LEN
            )));
        }
        Ok(())
    }
}
