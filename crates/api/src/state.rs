use std::sync::Arc;

use crate::service::FavouriteService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Business operations over the favourites store.
    pub service: Arc<FavouriteService>,
}
