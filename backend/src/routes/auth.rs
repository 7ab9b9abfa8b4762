//! Authentication routes
//!
//! Registration, login, and the token-gated protected route.
//!
//! # Performance
//!
//! - Pre-computed JWT keys come from AppState (no per-request allocation)
//! - Password hashing runs on the blocking thread pool

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::{AuthService, RegisterInput};
use crate::state::AppState;
use auth_service_shared::types::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;
use validator::Validate;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/protected", get(protected))
}

/// POST /register
///
/// All five fields are required. Success yields no token; the user logs in
/// separately.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    req.validate()
        .map_err(|_| ApiError::Validation("All fields are required".to_string()))?;

    let RegisterRequest {
        name: Some(name),
        age: Some(age),
        company: Some(company),
        username: Some(username),
        password: Some(password),
    } = req
    else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    AuthService::register(
        &state.db,
        RegisterInput {
            name,
            age,
            company,
            username,
            password,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    req.validate().map_err(|_| {
        ApiError::Validation("Username and password are required".to_string())
    })?;

    let LoginRequest {
        username: Some(username),
        password: Some(password),
    } = req
    else {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    };

    let token = AuthService::login(&state.db, state.jwt(), &username, &password).await?;

    Ok(Json(TokenResponse { token }))
}

/// GET /protected
///
/// The extractor rejects the request before this body runs unless a bearer
/// token verifies: 403 when no token is present, 401 when one is present
/// but invalid.
async fn protected(auth: AuthUser) -> Json<MessageResponse> {
    debug!(username = %auth.username, "protected route accessed");

    Json(MessageResponse {
        message: "Protected route accessed successfully".to_string(),
    })
}
