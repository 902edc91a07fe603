//! Request ID middleware for request tracing and correlation.
//!
//! The request ID is:
//! - Taken from an upstream proxy's `x-request-id` when it is well formed,
//!   otherwise a fresh UUID v4
//! - Recorded in the current tracing span
//! - Added to the Sentry scope for error correlation
//! - Returned in the response headers

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request ID that is reused.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Middleware that ensures every request has a usable request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id =
        upstream_request_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// The client-supplied request ID, if it is short printable ASCII.
///
/// Anything else would end up verbatim in logs and Sentry tags.
fn upstream_request_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?;
    let usable = !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value.bytes().all(|b| b.is_ascii_graphic());
    usable.then(|| value.to_owned())
}
