//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Client, ClientId, Invite, InviteId, NewClient, NewInvite, NewUser, User,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Fails with `DomainError::AlreadyExists` if the email is taken.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}

/// Repository for Client entities
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a client by ID, with its user and address
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError>;

    /// Create the user, the address and the client in one transaction
    ///
    /// Nothing is persisted if any of the three inserts fails.
    async fn create(&self, client: &NewClient) -> Result<Client, DomainError>;
}

/// Repository for Invite entities
#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Find an invite by ID
    async fn find_by_id(&self, id: &InviteId) -> Result<Option<Invite>, DomainError>;

    /// Find an invite by its token
    async fn find_by_token(&self, token: &str) -> Result<Option<Invite>, DomainError>;

    /// List invites sent by a client, newest first
    async fn find_by_sender(&self, sender_id: &ClientId) -> Result<Vec<Invite>, DomainError>;

    /// Count invites sent by a client
    async fn count_by_sender(&self, sender_id: &ClientId) -> Result<u64, DomainError>;

    /// Insert an invite unless the sender already has `limit` invites
    ///
    /// The count and the insert happen atomically with respect to other
    /// calls for the same sender. Returns `None` when the limit is reached.
    /// Fails with `DomainError::AlreadyExists` if the recipient was already
    /// invited by anyone.
    async fn create_within_limit(
        &self,
        invite: &NewInvite,
        limit: u64,
    ) -> Result<Option<Invite>, DomainError>;

    /// Mark an invite as sent
    async fn mark_sended(&self, id: &InviteId) -> Result<(), DomainError>;

    /// Expire every pending invite created before `cutoff`
    ///
    /// Returns the number of invites that changed.
    async fn expire_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
