//! User profile routes.

use axum::extract::State;
use axum::response::Json;

use identity::ProfileEnvelope;

use super::auth::CurrentUser;
use crate::services::account::{self, AuthError};
use crate::state::AppState;

/// `GET /api/user/profile` — return the current user's full public profile.
pub async fn user_profile(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ProfileEnvelope>, AuthError> {
    let user = account::profile(&state.pool, current.user.id).await?;
    Ok(Json(ProfileEnvelope { user }))
}
