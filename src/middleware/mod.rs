// ABOUTME: HTTP middleware for request tracing, session authentication and CORS
// ABOUTME: Provides request ID generation, request spans and the cross-origin policy

/// Session authentication for protected routes
pub mod auth;
/// CORS layer construction
pub mod cors;
/// Request ids and spans
pub mod tracing;

pub use auth::{authenticate_request, extract_session_token};
pub use cors::setup_cors;
pub use tracing::{create_request_span, MakeRequestUuid, REQUEST_ID_HEADER};
