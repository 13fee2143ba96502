//! One handler per dashboard tab, all returning the tab's view-model slice.
//!
//! Empty selections are not errors: an unknown artist comes back as a 200
//! with an empty slice and the `missing_artist` sentinel set, so the
//! frontend renders an empty state.

use artistrank_core::{DateRange, Selection, Tab, TabSlice};
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Default, Deserialize)]
pub(super) struct TabQuery {
    pub artist: Option<String>,
    /// Inclusive lower bound on editorial `added_at`, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound on editorial `added_at`, `YYYY-MM-DD`.
    pub to: Option<String>,
}

fn parse_date(raw: &str, param: &str, request_id: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ApiError::new(
            request_id,
            "bad_request",
            format!("invalid {param} date {raw:?}: expected YYYY-MM-DD"),
        )
    })
}

fn selection_from(query: &TabQuery, request_id: &str) -> Result<Selection, ApiError> {
    let from = query
        .from
        .as_deref()
        .map(|raw| parse_date(raw, "from", request_id))
        .transpose()?;
    let to = query
        .to
        .as_deref()
        .map(|raw| parse_date(raw, "to", request_id))
        .transpose()?;

    // A single bound leaves the other side of the closed interval open.
    let date_range = match (from, to) {
        (None, None) => None,
        (from, to) => Some(DateRange {
            from: from.unwrap_or(NaiveDate::MIN),
            to: to.unwrap_or(NaiveDate::MAX),
        }),
    };

    Ok(Selection {
        selected_artist: query.artist.clone(),
        secondary_artist: None,
        date_range,
    })
}

fn tab_response(
    state: &AppState,
    tab: Tab,
    query: &TabQuery,
    request_id: String,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    let selection = selection_from(query, &request_id)?;
    let data = state.dashboard.slice_for(tab, &selection);
    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(request_id),
    }))
}

pub(super) async fn overview(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Overview, &query, req_id.0)
}

pub(super) async fn engagement(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Engagement, &query, req_id.0)
}

pub(super) async fn geography(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Geography, &query, req_id.0)
}

pub(super) async fn growth(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Growth, &query, req_id.0)
}

pub(super) async fn editorial(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Editorial, &query, req_id.0)
}

pub(super) async fn songs(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Songs, &query, req_id.0)
}

pub(super) async fn cross_border(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::CrossBorder, &query, req_id.0)
}

pub(super) async fn report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Report, &query, req_id.0)
}

pub(super) async fn scouting(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TabQuery>,
) -> Result<Json<ApiResponse<TabSlice>>, ApiError> {
    tab_response(&state, Tab::Scouting, &query, req_id.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_to_no_filters() {
        let selection = selection_from(&TabQuery::default(), "req-1").expect("selection");
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn single_date_bound_leaves_other_side_open() {
        let query = TabQuery {
            from: Some("2025-07-14".to_owned()),
            ..TabQuery::default()
        };
        let selection = selection_from(&query, "req-1").expect("selection");
        let range = selection.date_range.expect("range");
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
        assert_eq!(range.to, NaiveDate::MAX);
    }

    #[test]
    fn malformed_date_is_a_bad_request() {
        let query = TabQuery {
            to: Some("next week".to_owned()),
            ..TabQuery::default()
        };
        let err = selection_from(&query, "req-1").expect_err("must fail");
        assert_eq!(err.error.code, "bad_request");
        assert!(err.error.message.contains("to"));
    }
}
