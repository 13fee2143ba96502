//! GET /api/v1/artists — the authoritative artist list for selectors.

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ArtistsData {
    pub artists: Vec<String>,
}

pub(super) async fn list_artists(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<ArtistsData>> {
    Json(ApiResponse {
        data: ArtistsData {
            artists: state.dashboard.artists_universe().to_vec(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
