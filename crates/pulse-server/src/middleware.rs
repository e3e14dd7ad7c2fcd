//! Request correlation.
//!
//! Every response carries an `x-request-id` header so a single profile
//! fetch can be traced through the logs. Callers may supply their own id;
//! a missing or unreadable one is replaced with a fresh UUIDv4.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation id for one request; handlers read it via `Extension`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    fn from_headers(req: &Request) -> Option<Self> {
        let raw = req.headers().get(&REQUEST_ID_HEADER)?.to_str().ok()?;
        (!raw.is_empty()).then(|| Self(raw.to_string()))
    }

    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Stores the correlation id in the request extensions and echoes it on
/// the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = RequestId::from_headers(&req).unwrap_or_else(RequestId::generate);
    req.extensions_mut().insert(id.clone());

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id.0) {
        response.headers_mut().insert(&REQUEST_ID_HEADER, value);
    }
    response
}
