//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod clients;
pub mod invites;
pub mod users;

pub use clients::{create_client, list_client_invites};
pub use invites::{create_invite, get_invite};
pub use users::create_user;
