//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod client_repo;
pub mod invite_repo;
pub mod user_repo;


pub use client_repo::PostgresClientRepository;
pub use invite_repo::PostgresInviteRepository;
pub use user_repo::PostgresUserRepository;
