use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod password;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::register))
        .route("/sessions", post(handlers::login))
        .route("/secrets", get(handlers::secrets))
}
