//! Geography extras: the two-artist comparison and the long-form
//! market-penetration matrix.

use artistrank_core::{GeoComparison, PenetrationCell};
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct CompareQuery {
    pub primary: String,
    pub secondary: String,
}

pub(super) async fn compare(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CompareQuery>,
) -> Json<ApiResponse<GeoComparison>> {
    Json(ApiResponse {
        data: state
            .dashboard
            .compare_geo(&query.primary, &query.secondary),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn penetration(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<PenetrationCell>>> {
    Json(ApiResponse {
        data: state.dashboard.derived().penetration.clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}
