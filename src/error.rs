use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not create user")]
    Conflict { errors: serde_json::Value },
    #[error("not logged in")]
    Unauthenticated,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(field) => ApiError::Conflict {
                errors: json!({ (field.as_str()): format!("{field} is already taken") }),
            },
            StoreError::Database(e) => ApiError::Internal(e.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Conflict { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Could not create user", "errors": errors })),
            )
                .into_response(),
            ApiError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "loggedOut": true }))).into_response()
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
