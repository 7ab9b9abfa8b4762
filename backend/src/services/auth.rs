//! Authentication service: registration and credential login
//!
//! Orchestrates the credential store, the password hasher, and the token
//! service. bcrypt work runs on the blocking thread pool so it never stalls
//! unrelated requests.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{NewUser, UserRepository};
use sqlx::PgPool;
use tracing::info;

/// Validated registration input, every field present
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub age: i32,
    pub company: String,
    pub username: String,
    pub password: String,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user.
    ///
    /// Success yields no token; the user logs in separately.
    pub async fn register(pool: &PgPool, input: RegisterInput) -> Result<(), ApiError> {
        // Cheap pre-check for the common case. The UNIQUE constraint still
        // closes the race between this check and the insert below.
        if UserRepository::username_exists(pool, &input.username).await? {
            return Err(ApiError::DuplicateUser);
        }

        let password_hash = PasswordService::hash_async(input.password)
            .await
            .map_err(ApiError::Internal)?;

        let new_user = NewUser {
            name: input.name,
            age: input.age,
            company: input.company,
            username: input.username,
            password_hash,
        };

        match UserRepository::create(pool, &new_user).await {
            Ok(user) => {
                info!(username = %user.username, "registered new user");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => Err(ApiError::DuplicateUser),
            Err(err) => Err(ApiError::Database(err)),
        }
    }

    /// Login with username and password, issuing a token on success.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        // Unknown usernames and wrong passwords take the same exit so the
        // response cannot be used for username enumeration.
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        jwt.issue(&user.username).map_err(ApiError::Internal)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
