//! Invite domain entity
//!
//! A referral invitation sent by a client to an email address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client::ClientId;

/// Unique identifier for an invite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InviteId(pub Uuid);

impl InviteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InviteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for InviteId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InviteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An invitation to join the platform
///
/// The token is set when the invite is first stored and never changes.
/// `sended` and `expired` are flipped later by the notification worker and
/// the expiry sweep.
#[derive(Debug, Clone, Serialize)]
pub struct Invite {
    pub id: InviteId,
    pub sender_id: ClientId,
    /// Recipient email, unique across all invites
    pub to: String,
    pub token: String,
    pub sended: bool,
    pub expired: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invite {
    /// Whether the invite can still be redeemed
    pub fn is_pending(&self) -> bool {
        !self.expired
    }
}

/// Data needed to create a new invite
#[derive(Debug, Clone)]
pub struct NewInvite {
    pub sender_id: ClientId,
    pub to: String,
    pub token: String,
}
