//! Address lookup port trait
//!
//! Resolves a postal code (CEP) into a structured address through an
//! external service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Structured address returned by the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub neighborhood: String,
    /// Postal code as formatted by the lookup service (may contain a dash)
    pub postal_code: String,
    pub city: String,
    pub street: String,
    pub region: String,
    pub complement: String,
}

/// Port trait for postal code lookups
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Look up the address for a postal code
    async fn lookup(&self, postal_code: &str) -> Result<AddressRecord, LookupError>;
}
