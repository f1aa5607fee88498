//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination and sort parameters (`?limit=&offset=&sort_by=&order=`).
///
/// Raw values are normalized into a `PageQuery` by the service layer.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Also accepted as `sortBy`.
    #[serde(alias = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
