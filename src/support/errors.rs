use thiserror::Error;

/// Fixed message for any rejected create, whatever the storage cause was.
pub const INVALID_OR_DUPLICATE: &str = "User already exists or invalid data";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    /// Insert rejected by the store (unique constraint or any other write error).
    /// Duplicate name and duplicate email are deliberately indistinguishable.
    #[error("{}", INVALID_OR_DUPLICATE)]
    InvalidOrDuplicate,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_is_fixed() {
        assert_eq!(
            DomainError::InvalidOrDuplicate.to_string(),
            "User already exists or invalid data"
        );
    }
}
