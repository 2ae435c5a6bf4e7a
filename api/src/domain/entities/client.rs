//! Client domain entity
//!
//! A client is a paying user. Every client owns exactly one address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::address::{Address, NewAddress};
use super::user::{NewUser, User};

/// Unique identifier for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ClientId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A paying client with its user account and address
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub user: User,
    pub address: Address,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Name shown to invite recipients, falling back to the email
    pub fn display_name(&self) -> &str {
        if self.user.name.trim().is_empty() {
            &self.user.email
        } else {
            &self.user.name
        }
    }
}

/// Data needed to create a client together with its user and address
#[derive(Debug, Clone)]
pub struct NewClient {
    pub user: NewUser,
    pub address: NewAddress,
}
