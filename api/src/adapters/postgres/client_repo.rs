//! PostgreSQL adapter for ClientRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use super::user_repo::insert_user;
use crate::domain::entities::{Address, AddressId, Client, ClientId, NewClient};
use crate::domain::ports::ClientRepository;
use crate::entity::{addresses, clients, users};
use crate::error::DomainError;

/// PostgreSQL implementation of ClientRepository
pub struct PostgresClientRepository {
    db: DatabaseConnection,
}

impl PostgresClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the user and address rows behind a client row
    async fn hydrate(&self, model: clients::Model) -> Result<Client, DomainError> {
        let user = users::Entity::find_by_id(model.user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!("Client {} has no user row", model.id))
            })?;

        let address = addresses::Entity::find_by_id(model.address_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!("Client {} has no address row", model.id))
            })?;

        Ok(assemble(model, user, address))
    }
}

fn assemble(model: clients::Model, user: users::Model, address: addresses::Model) -> Client {
    Client {
        id: ClientId(model.id),
        user: user.into(),
        address: address.into(),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError> {
        match clients::Entity::find_by_id(id.0).one(&self.db).await? {
            Some(model) => Ok(Some(self.hydrate(model).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, client: &NewClient) -> Result<Client, DomainError> {
        // Dropping the transaction without commit rolls every insert back
        let txn = self.db.begin().await?;

        let user = insert_user(&txn, &client.user).await?;

        let address = addresses::ActiveModel {
            id: Set(Uuid::new_v4()),
            neighborhood: Set(client.address.neighborhood.clone()),
            postal_code: Set(client.address.postal_code.clone()),
            city: Set(client.address.city.clone()),
            street: Set(client.address.street.clone()),
            region: Set(client.address.region.clone()),
            complement: Set(client.address.complement.clone()),
        }
        .insert(&txn)
        .await?;

        let model = clients::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            address_id: Set(address.id),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(assemble(model, user, address))
    }
}

/// Convert SeaORM model to domain entity
impl From<addresses::Model> for Address {
    fn from(model: addresses::Model) -> Self {
        Address {
            id: AddressId(model.id),
            neighborhood: model.neighborhood,
            postal_code: model.postal_code,
            city: model.city,
            street: model.street,
            region: model.region,
            complement: model.complement,
        }
    }
}
