use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body returned with 201 after a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: Uuid,
    pub access_token: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login always answers 200; the body tells the caller whether the
/// credentials matched.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoginResponse {
    #[serde(rename_all = "camelCase")]
    Granted { user_id: Uuid, access_token: String },
    #[serde(rename_all = "camelCase")]
    NotFound { not_found: bool },
}

impl LoginResponse {
    pub fn not_found() -> Self {
        LoginResponse::NotFound { not_found: true }
    }
}

/// Body of the protected resource.
#[derive(Debug, Serialize)]
pub struct SecretResponse {
    pub secret: &'static str,
}
