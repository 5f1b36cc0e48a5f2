use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::{error, warn};

use crate::domain::{
    DomainError, DomainResult, ListUsersDto, NewUser, User, UserRepositoryInterface,
};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
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
    }
}

fn new_user_to_active(user: NewUser) -> user::ActiveModel {
    user::ActiveModel {
        name: Set(user.name),
        email: Set(user.email),
        ..Default::default()
    }
}

/// SQL drivers bind OFFSET/LIMIT as signed 64-bit; larger windows mean "everything".
fn sql_bound(n: u64) -> u64 {
    n.min(i64::MAX as u64)
}

fn read_err(e: sea_orm::DbErr) -> DomainError {
    error!(error = %e, "User query failed");
    DomainError::Storage(e.to_string())
}

fn write_err(e: sea_orm::DbErr) -> DomainError {
    warn!(error = %e, "User insert rejected");
    DomainError::InvalidOrDuplicate
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for SeaOrmUserRepository {
    async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        let txn = self.db.begin().await.map_err(write_err)?;

        match new_user_to_active(new_user).insert(&txn).await {
            Ok(model) => {
                txn.commit().await.map_err(write_err)?;
                Ok(user_model_to_domain(model))
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    warn!(error = %rollback, "Rollback after failed insert also failed");
                }
                Err(write_err(e))
            }
        }
    }

    async fn list_users(&self, dto: ListUsersDto) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .offset(sql_bound(dto.skip))
            .limit(sql_bound(dto.limit))
            .all(&self.db)
            .await
            .map_err(read_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(read_err)?;

        Ok(model.map(user_model_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    async fn repo() -> SeaOrmUserRepository {
        SeaOrmUserRepository::new(test_database().await)
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let repo = repo().await;
        let a = repo
            .create_user(NewUser::new("alice", "alice@example.com"))
            .await
            .unwrap();
        let b = repo
            .create_user(NewUser::new("bob", "bob@example.com"))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
        assert_eq!(a.name, "alice");
        assert_eq!(a.email, "alice@example.com");
    }

    #[tokio::test]
    async fn duplicate_name_and_email_are_rejected_alike() {
        let repo = repo().await;
        let first = repo
            .create_user(NewUser::new("alice", "alice@example.com"))
            .await
            .unwrap();

        let same_name = repo
            .create_user(NewUser::new("alice", "other@example.com"))
            .await
            .unwrap_err();
        let same_email = repo
            .create_user(NewUser::new("carol", "alice@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(same_name, DomainError::InvalidOrDuplicate));
        assert!(matches!(same_email, DomainError::InvalidOrDuplicate));
        assert_eq!(same_name.to_string(), same_email.to_string());

        let stored = repo.get_user_by_id(first.id).await.unwrap();
        assert_eq!(stored, Some(first));
        let all = repo.list_users(ListUsersDto::default()).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn store_stays_usable_after_rollback() {
        let repo = repo().await;
        repo.create_user(NewUser::new("alice", "alice@example.com"))
            .await
            .unwrap();
        repo.create_user(NewUser::new("alice", "alice@example.com"))
            .await
            .unwrap_err();

        let next = repo
            .create_user(NewUser::new("bob", "bob@example.com"))
            .await
            .unwrap();
        assert_eq!(next.name, "bob");
    }

    #[tokio::test]
    async fn list_windows_in_insertion_order() {
        let repo = repo().await;
        let mut created = Vec::new();
        for name in ["a", "b", "c"] {
            created.push(
                repo.create_user(NewUser::new(name, format!("{}@example.com", name)))
                    .await
                    .unwrap(),
            );
        }

        let all = repo.list_users(ListUsersDto::default()).await.unwrap();
        assert_eq!(all, created);

        let second = repo
            .list_users(ListUsersDto { skip: 1, limit: 1 })
            .await
            .unwrap();
        assert_eq!(second, vec![created[1].clone()]);

        let past_end = repo
            .list_users(ListUsersDto { skip: 5, limit: 10 })
            .await
            .unwrap();
        assert!(past_end.is_empty());

        let none = repo
            .list_users(ListUsersDto { skip: 0, limit: 0 })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn window_beyond_signed_range_is_clamped() {
        let repo = repo().await;
        let alice = repo
            .create_user(NewUser::new("alice", "alice@example.com"))
            .await
            .unwrap();

        let everything = repo
            .list_users(ListUsersDto {
                skip: 0,
                limit: u64::MAX,
            })
            .await
            .unwrap();
        assert_eq!(everything, vec![alice]);

        let nothing = repo
            .list_users(ListUsersDto {
                skip: u64::MAX,
                limit: 10,
            })
            .await
            .unwrap();
        assert!(nothing.is_empty());
    }

    #[test]
    fn sql_bound_caps_at_i64_max() {
        assert_eq!(sql_bound(7), 7);
        assert_eq!(sql_bound(u64::MAX), i64::MAX as u64);
    }

    #[tokio::test]
    async fn missing_id_is_none() {
        let repo = repo().await;
        assert_eq!(repo.get_user_by_id(42).await.unwrap(), None);
    }
}
