use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{jwt::AuthUser, repo::CityFavorite},
    error::ApiError,
    state::AppState,
};

use super::{dto::AddFavoriteRequest, repo};

pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", post(add_favorite))
        .route("/favorites/:city_name", delete(remove_favorite))
}

#[instrument(skip(state, payload))]
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<AddFavoriteRequest>,
) -> Result<Json<Vec<CityFavorite>>, ApiError> {
    let cities = repo::add_city(&state.db, user_id, payload.city).await?;
    info!(user_id = %user_id, count = cities.len(), "favorite city added");
    Ok(Json(cities))
}

#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(city_name): Path<String>,
) -> Result<Json<Vec<CityFavorite>>, ApiError> {
    let cities = repo::remove_city(&state.db, user_id, &city_name).await?;
    info!(user_id = %user_id, count = cities.len(), "favorite city removed");
    Ok(Json(cities))
}
