//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. List endpoints add the
//! pre-pagination total and the effective window.

use favourites_core::pagination::{PageQuery, SortKey};
use favourites_core::query::Page;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "total", "limit", "offset" }` for paginated listings.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new<K: SortKey>(page: Page<T>, query: &PageQuery<K>) -> Self {
        Self {
            data: page.items,
            total: page.total,
            limit: query.limit,
            offset: query.offset,
        }
    }
}
