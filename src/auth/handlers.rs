use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use crate::auth::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SecretResponse,
};
use crate::auth::extractors::AuthUser;
use crate::auth::password;
use crate::error::ApiError;
use crate::state::AppState;

pub const SECRET_MESSAGE: &str = "All ok! - This is a super secret message";

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let hash = password::hash(&payload.password)?;

    // Uniqueness of name and email is enforced atomically by the store.
    let user = state
        .store
        .create(&payload.name, &payload.email, &hash)
        .await?;

    info!(user_id = %user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            access_token: user.access_token,
        }),
    ))
}

// Failed credentials answer 200 with a notFound flag rather than a 4xx;
// existing clients key off the body.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(user) = state.store.find_by_email(&payload.email).await? else {
        warn!("login with unknown email");
        return Ok(Json(LoginResponse::not_found()));
    };

    if !password::verify(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login with wrong password");
        return Ok(Json(LoginResponse::not_found()));
    }

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse::Granted {
        user_id: user.id,
        access_token: user.access_token,
    }))
}

pub async fn secrets(AuthUser(user): AuthUser) -> Json<SecretResponse> {
    info!(user_id = %user.id, "secret served");
    Json(SecretResponse {
        secret: SECRET_MESSAGE,
    })
}
