//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Insert a user row on any connection or open transaction
pub(super) async fn insert_user<C>(conn: &C, user: &NewUser) -> Result<users::Model, DbErr>
where
    C: ConnectionTrait,
{
    users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(user.email.clone()),
        name: Set(user.profile.name.clone()),
        is_active: Set(user.profile.is_active),
        is_staff: Set(user.profile.is_staff),
        password_hash: Set(user.password_hash.clone()),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(conn)
    .await
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let model = insert_user(&self.db, user).await?;

        Ok(model.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            email: model.email,
            name: model.name,
            is_active: model.is_active,
            is_staff: model.is_staff,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
