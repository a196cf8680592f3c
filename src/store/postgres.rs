use async_trait::async_trait;
use sqlx::PgPool;

use super::{token, DuplicateField, StoreError, User, UserStore};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let access_token = token::access_token();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, access_token)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, access_token, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(&access_token)
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, access_token, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_access_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, access_token, created_at
            FROM users
            WHERE access_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}

/// A violated unique constraint on `users` comes back as a database error;
/// map it to the field that collided.
fn map_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            let field = match db.constraint() {
                Some(c) if c.contains("email") => DuplicateField::Email,
                _ => DuplicateField::Name,
            };
            StoreError::Duplicate(field)
        }
        _ => StoreError::Database(err),
    }
}
