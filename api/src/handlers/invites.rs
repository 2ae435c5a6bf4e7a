//! Invite handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{ClientId, Invite};
use crate::error::AppError;
use crate::AppState;

/// Request body for sending an invite
#[derive(Debug, Deserialize)]
pub struct CreateInviteRequest {
    /// Client sending the invite
    pub sender_id: Option<Uuid>,
    /// Recipient email
    pub email: Option<String>,
}

/// POST /invites
///
/// Stores the invite and queues the invitation message. Delivery happens in
/// the background.
pub async fn create_invite(
    State(state): State<AppState>,
    Json(request): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<Invite>), AppError> {
    let sender = request.sender_id.map(ClientId);

    let invite = state
        .invite_service
        .create_invite(sender.as_ref(), request.email.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(invite)))
}

/// GET /invites/:token
pub async fn get_invite(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Invite>, AppError> {
    let invite = state
        .invite_service
        .find_by_token(&token)
        .await?
        .ok_or_else(|| AppError::NotFound("Invite not found".to_string()))?;

    Ok(Json(invite))
}
