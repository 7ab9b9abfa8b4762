//! Public-APIs directory proxy route

use crate::error::ApiResult;
use crate::services::DirectoryService;
use crate::state::AppState;
use auth_service_shared::types::DirectoryEntry;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Create directory proxy routes
pub fn apis_routes() -> Router<AppState> {
    Router::new().route("/apis", get(list_apis))
}

/// Query parameters for GET /apis.
///
/// `limit` stays a raw string so a non-numeric value is ignored instead of
/// rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ApisQuery {
    pub category: Option<String>,
    pub limit: Option<String>,
}

/// GET /apis?category=&limit=
async fn list_apis(
    State(state): State<AppState>,
    Query(query): Query<ApisQuery>,
) -> ApiResult<Json<Vec<DirectoryEntry>>> {
    let entries =
        DirectoryService::fetch_entries(state.http(), &state.config.directory.url).await?;

    Ok(Json(DirectoryService::filter(
        entries,
        query.category.as_deref(),
        query.limit.as_deref(),
    )))
}
