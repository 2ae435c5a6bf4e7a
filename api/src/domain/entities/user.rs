//! User domain entity
//!
//! Represents an identity on the Descontin platform. A user becomes a paying
//! client once a `Client` record links to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user, identified by email
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    /// Normalized (lowercase) email, unique across users
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub is_staff: bool,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account fields stored alongside email and password
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub is_active: bool,
    pub is_staff: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_active: true,
            is_staff: false,
        }
    }
}

impl UserProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Data needed to create a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub profile: UserProfile,
}

/// Normalize an email address for storage and lookup
///
/// Surrounding whitespace is dropped and both the local part and the domain
/// are lowercased, so `user@DESCONT.IN` and `User@descont.in` name the same
/// account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
