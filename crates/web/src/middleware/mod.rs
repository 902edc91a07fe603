//! HTTP middleware stack for the login page server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, binary only)
//! 2. `TraceLayer` (request tracing, binary only)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame denial, etc.)

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
