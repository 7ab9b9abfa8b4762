//! User repository for database operations
//!
//! User records are written once at registration and never updated or
//! deleted; username is the lookup key.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub company: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub company: String,
    pub username: String,
    pub password_hash: String,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user.
    ///
    /// The UNIQUE constraint on username is the authority on uniqueness; a
    /// concurrent duplicate surfaces as a unique-violation database error
    /// for the caller to map.
    pub async fn create(pool: &PgPool, user: &NewUser) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, age, company, username, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, age, company, username, password_hash, created_at
            "#,
        )
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.company)
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(pool)
        .await
    }

    /// Find user by username
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, age, company, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Check if username exists
    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    // Covered by the integration tests under tests/, which require a
    // database.
}
