//! Handlers for the asset catalog.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use favourites_core::pagination::AssetSortKey;
use favourites_core::types::AssetId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Body of `POST /assets`. `data` is decoded according to `type`.
#[derive(Debug, Deserialize)]
pub struct CreateAssetRequest {
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDescriptionRequest {
    pub description: String,
}

/// GET /api/v1/assets
///
/// List the catalog with pagination and sorting.
pub async fn list_assets(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let query = state.service.page_query::<AssetSortKey>(&params);

    let page = state.service.list_assets(query);

    Ok(Json(PageResponse::new(page, &query)))
}

/// POST /api/v1/assets
pub async fn create_asset(
    State(state): State<AppState>,
    input: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input?;

    let asset = state
        .service
        .create_asset(&input.asset_type, &input.description, input.data)?;

    tracing::info!(
        asset_id = %asset.id,
        asset_type = %asset.asset_type,
        "Asset created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    id: Result<Path<AssetId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let asset = state.service.get_asset(id)?;

    Ok(Json(DataResponse { data: asset }))
}

/// PATCH /api/v1/assets/{id}/description
pub async fn update_asset_description(
    State(state): State<AppState>,
    id: Result<Path<AssetId>, PathRejection>,
    input: Result<Json<UpdateDescriptionRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let Json(input) = input?;

    let asset = state
        .service
        .update_asset_description(id, &input.description)?;

    tracing::info!(asset_id = %id, "Asset description updated");

    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
///
/// Also removes every user's favourite of this asset.
pub async fn delete_asset(
    State(state): State<AppState>,
    id: Result<Path<AssetId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    state.service.delete_asset(id)?;

    tracing::info!(asset_id = %id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}
