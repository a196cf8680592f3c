//! Common test utilities and helpers for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use tokengate::app::build_app;
use tokengate::config::AppConfig;
use tokengate::state::AppState;
use tokengate::store::{access_token, DuplicateField, StoreError, User, UserStore};

/// In-memory `UserStore` with the same uniqueness semantics as the
/// database-backed one.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.name == name) {
            return Err(StoreError::Duplicate(DuplicateField::Name));
        }
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::Duplicate(DuplicateField::Email));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            access_token: access_token(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_access_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.access_token == token).cloned())
    }
}

/// Bind the app to an ephemeral port and return its base url plus a handle
/// on the backing store.
pub async fn spawn_app() -> (String, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::with_store(store.clone(), Arc::new(AppConfig::from_env()));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    (format!("http://{addr}"), store)
}
