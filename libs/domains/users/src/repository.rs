use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a validated user under a freshly assigned id
    async fn save(&self, user: NewUser) -> UserResult<User>;

    /// All users in ascending id order; empty when none exist
    async fn find_all(&self) -> UserResult<Vec<User>>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids start at 1 and are handed out under the write lock, so concurrent
/// saves never share one.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let user = User {
            id: store.last_id,
            login: user.login,
        };
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }
}
