//! Notification port traits
//!
//! Invite notifications are fire-and-forget: the invite flow only enqueues
//! a job, and delivery happens elsewhere.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::InviteId;
use crate::error::NotificationError;

/// A pending invitation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteNotification {
    pub invite_id: InviteId,
    pub sender_name: String,
    pub recipient_email: String,
}

/// Accepts invite notifications for later delivery
pub trait InviteNotifier: Send + Sync {
    /// Hand the notification off for delivery. Returns once it is queued.
    fn enqueue(&self, notification: InviteNotification) -> Result<(), NotificationError>;
}

/// Delivers a rendered message to a recipient
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError>;
}
