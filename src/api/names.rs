//! Name lookup API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{NameLookupRequest, NameLookupResponse, NameRecord};
use crate::AppState;

/// Reject blank input and trim the rest.
///
/// The lookup service accepts anything, so this is the only place an empty
/// name is caught.
pub fn validate_name(raw: &str) -> Result<&str, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Please enter a name".to_string()));
    }
    Ok(name)
}

async fn resolve(state: &AppState, raw: &str) -> ApiResult<NameLookupResponse> {
    let name = validate_name(raw)?;
    let record = state.lookup.lookup(name).await;
    success(NameLookupResponse::from(record))
}

/// GET /api/names/lookup?name= - Look up a name.
pub async fn lookup_name_query(
    State(state): State<AppState>,
    query: Result<Query<NameLookupRequest>, QueryRejection>,
) -> ApiResult<NameLookupResponse> {
    let Query(request) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    resolve(&state, &request.name).await
}

/// POST /api/names/lookup - Look up a name from a JSON body.
pub async fn lookup_name(
    State(state): State<AppState>,
    payload: Result<Json<NameLookupRequest>, JsonRejection>,
) -> ApiResult<NameLookupResponse> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    resolve(&state, &request.name).await
}

/// GET /api/names - List the documented names.
pub async fn list_known_names(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    success(state.lookup.known_names())
}

/// GET /api/names/featured - Get the featured name.
pub async fn get_featured_name(State(state): State<AppState>) -> ApiResult<NameRecord> {
    match state.lookup.featured() {
        Some(record) => success(record),
        None => Err(AppError::Internal("Featured name is missing".to_string())),
    }
}
