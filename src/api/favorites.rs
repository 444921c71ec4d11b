//! Favorites API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{FavoriteEntry, FavoriteStatus};
use crate::AppState;

/// Which copy of the list to read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoritesSource {
    /// The live in-memory list
    #[default]
    Memory,
    /// Whatever is currently persisted
    Storage,
}

/// Query parameters for listing favorites.
#[derive(Debug, Deserialize)]
pub struct ListFavoritesQuery {
    #[serde(default)]
    pub source: FavoritesSource,
}

fn parse_entry(
    payload: Result<Json<FavoriteEntry>, JsonRejection>,
) -> Result<FavoriteEntry, AppError> {
    let Json(entry) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if entry.name.trim().is_empty() {
        return Err(AppError::Validation("Favorite name is required".to_string()));
    }
    Ok(entry)
}

/// GET /api/favorites - List saved names.
pub async fn list_favorites(
    State(state): State<AppState>,
    query: Result<Query<ListFavoritesQuery>, QueryRejection>,
) -> ApiResult<Vec<FavoriteEntry>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let favorites = match query.source {
        FavoritesSource::Memory => state.favorites.list().await,
        FavoritesSource::Storage => state.favorites.load_all().await,
    };
    success(favorites)
}

/// POST /api/favorites - Save a name.
pub async fn add_favorite(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteEntry>, JsonRejection>,
) -> ApiResult<FavoriteStatus> {
    let entry = parse_entry(payload)?;
    let name = entry.name.clone();

    state.favorites.add(entry).await;

    success(FavoriteStatus {
        name,
        is_favorite: true,
    })
}

/// POST /api/favorites/:name/toggle - Save or unsave a name.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<FavoriteEntry>, JsonRejection>,
) -> ApiResult<FavoriteStatus> {
    let entry = parse_entry(payload)?;
    if entry.name != name {
        return Err(AppError::Validation(format!(
            "Favorite name {:?} does not match path {:?}",
            entry.name, name
        )));
    }

    let is_favorite = state.favorites.toggle(entry).await;

    success(FavoriteStatus { name, is_favorite })
}

/// GET /api/favorites/:name - Check whether a name is saved.
pub async fn get_favorite_status(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<FavoriteStatus> {
    let is_favorite = state.favorites.contains(&name).await;
    success(FavoriteStatus { name, is_favorite })
}

/// DELETE /api/favorites/:name - Remove a saved name.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<FavoriteStatus> {
    state.favorites.remove(&name).await;

    success(FavoriteStatus {
        name,
        is_favorite: false,
    })
}
