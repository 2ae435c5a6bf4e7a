//! Application layer
//!
//! Services orchestrating domain logic over the port traits.

pub mod account_service;
pub mod invite_service;
pub mod notification_worker;
pub mod service_config;
pub mod validation;

pub use account_service::AccountService;
pub use invite_service::InviteService;
pub use notification_worker::NotificationWorker;
pub use service_config::ServiceConfig;
