mod instagram;
mod tiktok;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use pulse_acquire::ProfileClient;
use pulse_extract::NOT_AVAILABLE;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ProfileClient>,
}

/// Flat `{"error": ...}` body with an explicit status, matching the
/// boundary format the service has always produced.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "User not found or unable to fetch profile".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// Legacy mixed-type field: a count when observed, "Not Available" when not.
pub(super) fn count_or_not_available(value: Option<u64>) -> Value {
    value.map_or_else(|| Value::from(NOT_AVAILABLE), Value::from)
}

/// Legacy mixed-type field: a boolean when the source said either way.
pub(super) fn bool_or_not_available(value: Option<bool>) -> Value {
    value.map_or_else(|| Value::from(NOT_AVAILABLE), Value::from)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tiktok/user_info/{identifier}", get(tiktok::user_info))
        .route(
            "/tiktok/engagement_rate/{identifier}",
            get(tiktok::engagement_rate),
        )
        .route("/instagram/user_info/{username}", get(instagram::user_info))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthData { status: "ok" }))
}
