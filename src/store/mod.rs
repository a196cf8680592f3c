use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

mod postgres;
mod token;

pub use postgres::PgStore;
pub use token::access_token;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub access_token: String,
    pub created_at: OffsetDateTime,
}

/// Which unique column an insert collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Name,
    Email,
}

impl DuplicateField {
    pub fn as_str(self) -> &'static str {
        match self {
            DuplicateField::Name => "name",
            DuplicateField::Email => "email",
        }
    }
}

impl std::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} is already taken")]
    Duplicate(DuplicateField),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence seam for user records. The concrete store owns uniqueness
/// enforcement; callers never pre-check for collisions.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. The access token is generated here as part of the
    /// insert, never by a schema-level default.
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_access_token(&self, token: &str) -> Result<Option<User>, StoreError>;
}
