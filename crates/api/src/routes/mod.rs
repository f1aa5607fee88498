pub mod assets;
pub mod favourites;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                                          list, create
/// /assets/{id}                                     get, delete
/// /assets/{id}/description                         update description (PATCH)
///
/// /users/{user_id}/favourites                      list, add
/// /users/{user_id}/favourites/{favourite_id}       get, remove
/// /users/{user_id}/assets/{asset_id}/favourite     favourite check
///
/// /integrity                                       orphan-favourite scan
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .nest("/users", favourites::router())
        .route("/integrity", get(handlers::integrity::integrity_check))
}
