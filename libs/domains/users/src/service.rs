use observability::users::UserMetrics;
use std::sync::Arc;
use validator::ValidationErrors;

use crate::error::UserResult;
use crate::models::{CreateUser, NewUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new user.
    ///
    /// Invalid input never reaches the repository.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let new_user = NewUser::try_from(input).inspect_err(record_rejected_fields)?;

        let user = self.repository.save(new_user).await?;
        UserMetrics::record_created();
        Ok(user)
    }

    /// Every stored user, ascending by id
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        let users = self.repository.find_all().await?;
        UserMetrics::record_listed(users.len());
        Ok(users)
    }
}

/// One `users_rejected_total` increment per failing field
pub(crate) fn record_rejected_fields(errors: &ValidationErrors) {
    for field in errors.field_errors().keys() {
        UserMetrics::record_rejected(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn test_create_user_saves_validated_login() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_save()
            .with(eq(NewUser {
                login: "alice".to_string(),
            }))
            .times(1)
            .returning(|u| Ok(User { id: 1, login: u.login }));

        let service = UserService::new(mock_repo);
        let user = service.create_user(CreateUser::with_login("alice")).await.unwrap();

        assert_eq!(user, User { id: 1, login: "alice".into() });
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_save().never();

        let service = UserService::new(mock_repo);

        for input in [
            CreateUser::with_login(""),
            CreateUser::with_login("x".repeat(65)),
            CreateUser::default(),
            CreateUser {
                id: Some(3),
                ..CreateUser::with_login("alice")
            },
        ] {
            let err = service.create_user(input).await.unwrap_err();
            assert!(matches!(err, UserError::Validation(_)), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn test_storage_failure_on_save_is_reported() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(DbErr::Custom("disk full".into()).into()));

        let service = UserService::new(mock_repo);
        let err = service.create_user(CreateUser::with_login("alice")).await.unwrap_err();

        assert!(matches!(err, UserError::Storage(_)));
    }

    #[tokio::test]
    async fn test_list_users_passes_through_repository_order() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                User { id: 1, login: "alice".into() },
                User { id: 2, login: "bob".into() },
            ])
        });

        let service = UserService::new(mock_repo);
        let users = service.list_users().await.unwrap();

        let logins: Vec<&str> = users.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, ["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_list_users_storage_failure() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_all()
            .returning(|| Err(DbErr::Custom("connection reset".into()).into()));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.list_users().await,
            Err(UserError::Storage(_))
        ));
    }
}
