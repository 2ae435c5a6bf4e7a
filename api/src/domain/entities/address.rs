//! Address domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub Uuid);

impl AddressId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AddressId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AddressId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum stored length of a postal code
pub const POSTAL_CODE_MAX_LEN: usize = 8;

/// A client's address
///
/// Addresses are written once, when the owning client is created, and are
/// never shared between clients.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub id: AddressId,
    pub neighborhood: String,
    pub postal_code: Option<String>,
    pub city: String,
    pub street: String,
    pub region: String,
    pub complement: String,
}

/// Data needed to create a new address
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub neighborhood: String,
    pub postal_code: Option<String>,
    pub city: String,
    pub street: String,
    pub region: String,
    pub complement: String,
}
