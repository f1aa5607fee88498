//! Handlers for user-scoped favourites.
//!
//! The user id comes from the path; there is no authentication layer here.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use favourites_core::pagination::FavouriteSortKey;
use favourites_core::types::{AssetId, FavouriteId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddFavouriteRequest {
    pub asset_id: AssetId,
}

#[derive(Debug, Serialize)]
pub struct FavouriteStatus {
    pub is_favourite: bool,
}

/// GET /api/v1/users/{user_id}/favourites
pub async fn list_favourites(
    State(state): State<AppState>,
    user_id: Result<Path<UserId>, PathRejection>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(user_id) = user_id?;
    let Query(params) = params?;
    let query = state.service.page_query::<FavouriteSortKey>(&params);

    let page = state.service.list_favourites(user_id, query)?;

    Ok(Json(PageResponse::new(page, &query)))
}

/// POST /api/v1/users/{user_id}/favourites
pub async fn add_favourite(
    State(state): State<AppState>,
    user_id: Result<Path<UserId>, PathRejection>,
    input: Result<Json<AddFavouriteRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(user_id) = user_id?;
    let Json(input) = input?;

    let favourite = state.service.add_favourite(user_id, input.asset_id)?;

    tracing::info!(
        user_id = %user_id,
        favourite_id = %favourite.id,
        asset_id = %input.asset_id,
        "Favourite added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: favourite })))
}

/// GET /api/v1/users/{user_id}/favourites/{favourite_id}
pub async fn get_favourite(
    State(state): State<AppState>,
    ids: Result<Path<(UserId, FavouriteId)>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path((user_id, favourite_id)) = ids?;
    let favourite = state.service.get_favourite(user_id, favourite_id)?;

    Ok(Json(DataResponse { data: favourite }))
}

/// DELETE /api/v1/users/{user_id}/favourites/{favourite_id}
pub async fn remove_favourite(
    State(state): State<AppState>,
    ids: Result<Path<(UserId, FavouriteId)>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path((user_id, favourite_id)) = ids?;
    state.service.remove_favourite(user_id, favourite_id)?;

    tracing::info!(user_id = %user_id, favourite_id = %favourite_id, "Favourite removed");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/{user_id}/assets/{asset_id}/favourite
pub async fn check_favourite(
    State(state): State<AppState>,
    ids: Result<Path<(UserId, AssetId)>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path((user_id, asset_id)) = ids?;
    let is_favourite = state.service.is_favourite(user_id, asset_id);

    Ok(Json(DataResponse {
        data: FavouriteStatus { is_favourite },
    }))
}
