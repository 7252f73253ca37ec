use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Schema,
};

use crate::{
    entity,
    error::UserResult,
    models::{NewUser, User},
    repository::UserRepository,
};

/// SeaORM-backed user repository (Postgres or SQLite)
///
/// Ids come from the table's auto-increment primary key.
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db: DatabaseConnection,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `users` table if it does not exist yet
    pub async fn ensure_schema(&self) -> UserResult<()> {
        let backend = self.db.get_database_backend();
        let mut table = Schema::new(backend).create_table_from_entity(entity::Entity);
        table.if_not_exists();
        let stmt = backend.build(&table);

        self.db.execute_raw(stmt).await?;
        tracing::debug!(?backend, "Users table ready");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn save(&self, user: NewUser) -> UserResult<User> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            login: Set(user.login),
        };

        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
