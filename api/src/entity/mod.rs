//! SeaORM entities
//!
//! Table models for PostgreSQL. Repositories convert these into the domain
//! entities in `crate::domain::entities`.

pub mod addresses;
pub mod clients;
pub mod invites;
pub mod users;
