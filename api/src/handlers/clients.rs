//! Client handlers
//!
//! Client sign-up and the client's own invite listing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Client, ClientId, Invite, UserProfile};
use crate::error::AppError;
use crate::AppState;

/// Request body for client sign-up
///
/// As with `POST /users`, account flags in the body are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub email: Option<String>,
    pub password: String,
    pub postal_code: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl CreateClientRequest {
    pub fn profile(&self) -> UserProfile {
        UserProfile::named(self.name.clone())
    }
}

/// Response body for a client's invites
#[derive(Debug, Serialize)]
pub struct ClientInvitesResponse {
    pub invites: Vec<Invite>,
    /// Invites the client may still send
    pub remaining: u64,
}

/// POST /clients
///
/// The postal code must resolve to a neighborhood inside the service zone.
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let client = state
        .account_service
        .create_client(
            request.email.as_deref(),
            &request.password,
            request.postal_code.as_deref(),
            request.profile(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /clients/:id/invites
pub async fn list_client_invites(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientInvitesResponse>, AppError> {
    let client_id = ClientId(id);

    let remaining = state.invite_service.remaining_invites(&client_id).await?;
    let invites = state.invite_service.list_invites(&client_id).await?;

    Ok(Json(ClientInvitesResponse { invites, remaining }))
}
