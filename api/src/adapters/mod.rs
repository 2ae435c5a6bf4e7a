//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod notifications;
pub mod postgres;
pub mod viacep;

pub use notifications::{LogMailer, QueueNotifier};
pub use postgres::{PostgresClientRepository, PostgresInviteRepository, PostgresUserRepository};
pub use viacep::ViaCepClient;
