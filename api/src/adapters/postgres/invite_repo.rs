//! PostgreSQL adapter for InviteRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::entities::{ClientId, Invite, InviteId, NewInvite};
use crate::domain::ports::InviteRepository;
use crate::entity::{clients, invites};
use crate::error::DomainError;

/// PostgreSQL implementation of InviteRepository
pub struct PostgresInviteRepository {
    db: DatabaseConnection,
}

impl PostgresInviteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InviteRepository for PostgresInviteRepository {
    async fn find_by_id(&self, id: &InviteId) -> Result<Option<Invite>, DomainError> {
        let result = invites::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Invite>, DomainError> {
        let result = invites::Entity::find()
            .filter(invites::Column::Token.eq(token))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_sender(&self, sender_id: &ClientId) -> Result<Vec<Invite>, DomainError> {
        let results = invites::Entity::find()
            .filter(invites::Column::SenderId.eq(sender_id.0))
            .order_by_desc(invites::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count_by_sender(&self, sender_id: &ClientId) -> Result<u64, DomainError> {
        let count = invites::Entity::find()
            .filter(invites::Column::SenderId.eq(sender_id.0))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn create_within_limit(
        &self,
        invite: &NewInvite,
        limit: u64,
    ) -> Result<Option<Invite>, DomainError> {
        let txn = self.db.begin().await?;

        // SELECT ... FOR UPDATE on the sender serializes concurrent inserts
        // for the same client until this transaction ends.
        let sender = clients::Entity::find_by_id(invite.sender_id.0)
            .lock_exclusive()
            .one(&txn)
            .await?;
        if sender.is_none() {
            return Err(DomainError::NotFound(format!(
                "Client {} not found",
                invite.sender_id
            )));
        }

        let sent = invites::Entity::find()
            .filter(invites::Column::SenderId.eq(invite.sender_id.0))
            .count(&txn)
            .await?;
        if sent >= limit {
            txn.rollback().await?;
            return Ok(None);
        }

        let now = Utc::now().fixed_offset();
        let model = invites::ActiveModel {
            id: Set(Uuid::new_v4()),
            sender_id: Set(invite.sender_id.0),
            recipient_email: Set(invite.to.clone()),
            token: Set(invite.token.clone()),
            sended: Set(false),
            expired: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(model.into()))
    }

    async fn mark_sended(&self, id: &InviteId) -> Result<(), DomainError> {
        let result = invites::ActiveModel {
            id: Set(id.0),
            sended: Set(true),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => {
                Err(DomainError::NotFound(format!("Invite {} not found", id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn expire_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = invites::Entity::update_many()
            .col_expr(invites::Column::Expired, Expr::value(true))
            .col_expr(
                invites::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(invites::Column::Expired.eq(false))
            .filter(invites::Column::CreatedAt.lt(cutoff.fixed_offset()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Convert SeaORM model to domain entity
impl From<invites::Model> for Invite {
    fn from(model: invites::Model) -> Self {
        Invite {
            id: InviteId(model.id),
            sender_id: ClientId(model.sender_id),
            to: model.recipient_email,
            token: model.token,
            sended: model.sended,
            expired: model.expired,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
