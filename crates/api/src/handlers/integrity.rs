//! On-demand referential integrity diagnostics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IntegrityReport {
    pub status: &'static str,
}

/// GET /api/v1/integrity
///
/// Runs the orphan-favourite scan. A detected orphan surfaces as a 500
/// `DATA_INTEGRITY` error and is logged with its ids.
pub async fn integrity_check(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.service.integrity_check()?;

    Ok(Json(DataResponse {
        data: IntegrityReport { status: "ok" },
    }))
}
