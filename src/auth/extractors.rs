use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::{error, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::User;

/// Guard for protected routes: resolves the `Authorization` header to a
/// stored user before the handler runs. The header carries the raw access
/// token, with no scheme prefix.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let user = state.store.find_by_access_token(token).await.map_err(|e| {
            error!(error = %e, "access token lookup failed");
            ApiError::Internal(e.into())
        })?;

        let Some(user) = user else {
            warn!("unknown access token");
            return Err(ApiError::Unauthenticated);
        };

        Ok(AuthUser(user))
    }
}
