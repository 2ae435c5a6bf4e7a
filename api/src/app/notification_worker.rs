//! Invite notification worker
//!
//! Drains the notification queue, renders each invitation and hands it to
//! a mailer. Delivery is best effort: failures are logged and dropped.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain::ports::{InviteNotification, InviteRepository, Mailer};

/// Subject line of the invitation message
pub const INVITE_SUBJECT: &str = "You're invited to Descontin";

/// Render the invitation body
pub fn render_invite_message(sender_name: &str, recipient_email: &str) -> String {
    format!(
        "Hello {}, {} invited you to join Descontin and enjoy the best \
         discounts in your neighborhood.",
        recipient_email, sender_name
    )
}

/// Background worker delivering invite notifications
pub struct NotificationWorker<M, IR>
where
    M: Mailer,
    IR: InviteRepository,
{
    mailer: Arc<M>,
    invites: Arc<IR>,
}

impl<M, IR> NotificationWorker<M, IR>
where
    M: Mailer,
    IR: InviteRepository,
{
    pub fn new(mailer: Arc<M>, invites: Arc<IR>) -> Self {
        Self { mailer, invites }
    }

    /// Deliver one notification and mark the invite as sent
    ///
    /// Invites that expired or disappeared while queued are skipped.
    /// Returns whether the message went out.
    pub async fn deliver(&self, notification: &InviteNotification) -> bool {
        match self.invites.find_by_id(&notification.invite_id).await {
            Ok(Some(invite)) if invite.is_pending() => {}
            Ok(_) => {
                tracing::debug!(
                    invite_id = %notification.invite_id,
                    "Invite no longer pending, skipping delivery"
                );
                return false;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    invite_id = %notification.invite_id,
                    "Failed to load invite for delivery"
                );
                return false;
            }
        }

        let body = render_invite_message(&notification.sender_name, &notification.recipient_email);

        if let Err(e) = self
            .mailer
            .send(&notification.recipient_email, INVITE_SUBJECT, &body)
            .await
        {
            tracing::warn!(
                error = %e,
                invite_id = %notification.invite_id,
                "Failed to deliver invite"
            );
            return false;
        }

        if let Err(e) = self.invites.mark_sended(&notification.invite_id).await {
            tracing::warn!(
                error = %e,
                invite_id = %notification.invite_id,
                "Invite delivered but not marked as sent"
            );
        }

        true
    }

    /// Process notifications until every sender is dropped
    pub async fn run(self, mut queue: UnboundedReceiver<InviteNotification>) {
        tracing::info!("Invite notification worker started");

        while let Some(notification) = queue.recv().await {
            self.deliver(&notification).await;
        }

        tracing::info!("Invite notification worker stopped");
    }
}
