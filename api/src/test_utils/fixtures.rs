//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::app::service_config::ServiceConfig;
use crate::domain::entities::{Address, AddressId, Client, ClientId, Invite, InviteId, User, UserId};
use crate::domain::ports::AddressRecord;

/// Create a test user with default values
pub fn test_user() -> User {
    let id = Uuid::new_v4();
    User {
        id: UserId(id),
        email: format!("user-{}@descont.in", &id.to_string()[..8]),
        name: "Test User".to_string(),
        is_active: true,
        is_staff: false,
        password_hash: "$2b$04$notarealhash".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a test client living in a served neighborhood
pub fn test_client() -> Client {
    Client {
        id: ClientId(Uuid::new_v4()),
        user: test_user(),
        address: Address {
            id: AddressId(Uuid::new_v4()),
            neighborhood: "Vasco da Gama".to_string(),
            postal_code: Some("20941150".to_string()),
            city: "Rio de Janeiro".to_string(),
            street: "Rua General Almério de Moura".to_string(),
            region: "RJ".to_string(),
            complement: String::new(),
        },
        created_at: Utc::now(),
    }
}

/// Create a pending invite from `sender_id` to `to`
pub fn test_invite(sender_id: ClientId, to: &str) -> Invite {
    let now = Utc::now();
    Invite {
        id: InviteId(Uuid::new_v4()),
        sender_id,
        to: to.to_string(),
        token: Uuid::new_v4().simple().to_string(),
        sended: false,
        expired: false,
        created_at: now,
        updated_at: now,
    }
}

/// Create a lookup result in Rio de Janeiro
pub fn address_record(neighborhood: &str, postal_code: &str) -> AddressRecord {
    AddressRecord {
        neighborhood: neighborhood.to_string(),
        postal_code: postal_code.to_string(),
        city: "Rio de Janeiro".to_string(),
        street: "Rua de Teste".to_string(),
        region: "RJ".to_string(),
        complement: String::new(),
    }
}

/// Service settings with a cheap bcrypt cost
pub fn test_service_config() -> ServiceConfig {
    ServiceConfig {
        bcrypt_cost: 4,
        ..ServiceConfig::default()
    }
}
