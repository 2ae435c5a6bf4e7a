//! User handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::domain::entities::{User, UserProfile};
use crate::error::AppError;
use crate::AppState;

/// Request body for user registration
///
/// Account flags are not part of the public body. Unknown fields such as
/// `is_staff` are ignored and new users always start active and non-staff.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

impl CreateUserRequest {
    pub fn profile(&self) -> UserProfile {
        UserProfile::named(self.name.clone())
    }
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state
        .account_service
        .create_user(
            request.email.as_deref(),
            &request.password,
            request.profile(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
