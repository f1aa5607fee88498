//! Route definitions for the asset catalog.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /                  -> list_assets
/// POST   /                  -> create_asset
/// GET    /{id}              -> get_asset
/// DELETE /{id}              -> delete_asset (cascades to favourites)
/// PATCH  /{id}/description  -> update_asset_description
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/{id}", get(assets::get_asset).delete(assets::delete_asset))
        .route("/{id}/description", patch(assets::update_asset_description))
}
