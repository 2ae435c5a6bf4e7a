//! Invite service
//!
//! Handles referral invites: sender checks, the per-client quota, token
//! generation and handing the notification off to the delivery queue.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;

use crate::app::service_config::{ServiceConfig, INVITE_TOKEN_BYTES};
use crate::app::validation::validate_email_syntax;
use crate::domain::entities::{normalize_email, ClientId, Invite, InviteId, NewInvite};
use crate::domain::ports::{ClientRepository, InviteNotification, InviteNotifier, InviteRepository};
use crate::error::AppError;

/// Service for managing invites
pub struct InviteService<CR, IR, N>
where
    CR: ClientRepository,
    IR: InviteRepository,
    N: InviteNotifier,
{
    clients: Arc<CR>,
    invites: Arc<IR>,
    notifier: Arc<N>,
    config: ServiceConfig,
}

impl<CR, IR, N> InviteService<CR, IR, N>
where
    CR: ClientRepository,
    IR: InviteRepository,
    N: InviteNotifier,
{
    pub fn new(
        clients: Arc<CR>,
        invites: Arc<IR>,
        notifier: Arc<N>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            clients,
            invites,
            notifier,
            config,
        }
    }

    /// Create an invite from a client to an email address
    ///
    /// Checks, in order:
    /// 1. The sender is an existing client (`InvalidSender`)
    /// 2. The recipient email is present and well formed (`InvalidEmail`)
    /// 3. The sender has invites left (`InvitationLimitExceeded`)
    ///
    /// On success the notification is queued and not awaited. Inviting an
    /// email that was already invited by anyone fails with a storage
    /// conflict.
    pub async fn create_invite(
        &self,
        sender: Option<&ClientId>,
        to: Option<&str>,
    ) -> Result<Invite, AppError> {
        let sender_id = sender.ok_or(AppError::InvalidSender)?;
        let sender = self
            .clients
            .find_by_id(sender_id)
            .await?
            .ok_or(AppError::InvalidSender)?;

        let to = to
            .map(str::trim)
            .filter(|email| !email.is_empty() && validate_email_syntax(email))
            .map(normalize_email)
            .ok_or(AppError::InvalidEmail)?;

        let limit = self.config.invite_limit;
        if self.invites.count_by_sender(&sender.id).await? >= limit {
            return Err(AppError::InvitationLimitExceeded);
        }

        let new_invite = NewInvite {
            sender_id: sender.id,
            to,
            token: generate_invite_token(),
        };

        // The repository recounts under a lock, so concurrent requests from
        // one sender cannot push it past the limit.
        let invite = self
            .invites
            .create_within_limit(&new_invite, limit)
            .await?
            .ok_or(AppError::InvitationLimitExceeded)?;

        tracing::info!(invite_id = %invite.id, sender_id = %sender.id, "Invite created");

        let notification = InviteNotification {
            invite_id: invite.id,
            sender_name: sender.display_name().to_string(),
            recipient_email: invite.to.clone(),
        };
        if let Err(e) = self.notifier.enqueue(notification) {
            tracing::warn!(
                error = %e,
                invite_id = %invite.id,
                "Failed to queue invite notification"
            );
        }

        Ok(invite)
    }

    /// Number of invites the client can still send
    pub async fn remaining_invites(&self, sender_id: &ClientId) -> Result<u64, AppError> {
        self.require_client(sender_id).await?;
        let sent = self.invites.count_by_sender(sender_id).await?;
        Ok(self.config.invite_limit.saturating_sub(sent))
    }

    /// List the invites sent by a client, newest first
    pub async fn list_invites(&self, sender_id: &ClientId) -> Result<Vec<Invite>, AppError> {
        self.require_client(sender_id).await?;
        Ok(self.invites.find_by_sender(sender_id).await?)
    }

    /// Find an invite by its token
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Invite>, AppError> {
        Ok(self.invites.find_by_token(token).await?)
    }

    /// Record that the invitation message went out
    pub async fn mark_sended(&self, id: &InviteId) -> Result<(), AppError> {
        self.invites.mark_sended(id).await?;
        Ok(())
    }

    /// Expire pending invites older than `max_age`
    pub async fn expire_stale(&self, max_age: Duration) -> Result<u64, AppError> {
        let cutoff = Utc::now().checked_sub_signed(max_age).ok_or_else(|| {
            AppError::BadRequest(format!("Invite age out of range: {}", max_age))
        })?;
        let expired = self.invites.expire_created_before(cutoff).await?;
        if expired > 0 {
            tracing::info!(expired, "Expired stale invites");
        }
        Ok(expired)
    }

    async fn require_client(&self, id: &ClientId) -> Result<(), AppError> {
        match self.clients.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Client {} not found", id))),
        }
    }
}

/// Generate a random invite token
fn generate_invite_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..INVITE_TOKEN_BYTES).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}
