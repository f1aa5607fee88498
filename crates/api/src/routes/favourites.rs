//! Route definitions for user-scoped favourites.

use axum::routing::get;
use axum::Router;

use crate::handlers::favourites;
use crate::state::AppState;

/// Favourite routes mounted at `/users`.
///
/// ```text
/// GET    /{user_id}/favourites                    -> list_favourites
/// POST   /{user_id}/favourites                    -> add_favourite
/// GET    /{user_id}/favourites/{favourite_id}     -> get_favourite
/// DELETE /{user_id}/favourites/{favourite_id}     -> remove_favourite
/// GET    /{user_id}/assets/{asset_id}/favourite   -> check_favourite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/favourites",
            get(favourites::list_favourites).post(favourites::add_favourite),
        )
        .route(
            "/{user_id}/favourites/{favourite_id}",
            get(favourites::get_favourite).delete(favourites::remove_favourite),
        )
        .route(
            "/{user_id}/assets/{asset_id}/favourite",
            get(favourites::check_favourite),
        )
}
