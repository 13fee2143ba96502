mod artists;
mod geography;
mod tabs;

use std::sync::Arc;

use artistrank_core::Dashboard;
use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    artists: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn data_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/artists", get(artists::list_artists))
        .route("/api/v1/tabs/overview", get(tabs::overview))
        .route("/api/v1/tabs/engagement", get(tabs::engagement))
        .route("/api/v1/tabs/geography", get(tabs::geography))
        .route("/api/v1/tabs/growth", get(tabs::growth))
        .route("/api/v1/tabs/editorial", get(tabs::editorial))
        .route("/api/v1/tabs/songs", get(tabs::songs))
        .route("/api/v1/tabs/cross-border", get(tabs::cross_border))
        .route("/api/v1/tabs/report", get(tabs::report))
        .route("/api/v1/tabs/scouting", get(tabs::scouting))
        .route("/api/v1/geography/compare", get(geography::compare))
        .route(
            "/api/v1/geography/penetration",
            get(geography::penetration),
        )
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        )))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(data_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                artists: state.dashboard.artists_universe().len(),
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

#[cfg(test)]
fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(120, std::time::Duration::from_secs(60))
}
