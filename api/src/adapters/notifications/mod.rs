//! Notification adapters
//!
//! In-memory work queue for invite notifications and the default mailer.

pub mod log_mailer;
pub mod queue;

pub use log_mailer::LogMailer;
pub use queue::QueueNotifier;
