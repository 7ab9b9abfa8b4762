//! Bearer-token extraction for protected routes
//!
//! Uses the pre-computed JWT keys from AppState so verification costs no
//! per-request key derivation.
//!
//! A request with no token at all is rejected 403; a request whose token
//! fails verification is rejected 401. The split is part of the public
//! contract.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

/// Authenticated user extracted from a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // The token is the second whitespace-separated part of the header,
        // so a missing header and a bare scheme both count as "no token".
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.split_whitespace().nth(1))
            .ok_or(ApiError::NoToken)?;

        let claims = app_state.jwt().verify(token).map_err(|reason| {
            debug!(%reason, "bearer token rejected");
            ApiError::Unauthenticated(reason)
        })?;

        Ok(AuthUser {
            username: claims.username,
        })
    }
}
