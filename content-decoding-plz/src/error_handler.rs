use std::sync::Arc;

use http::{Request, StatusCode};

use crate::body::Body;
use crate::error::DecodeError;
use crate::response::{ResponseWriter, http_error};

/// Called once when a decode step fails. It owns the response from then
/// on; nothing is written for it.
///
/// When a built-in codec fails the request body has been consumed and is
/// empty. After a custom decoder fails it is whatever that decoder left.
pub type ErrorHandler =
    Arc<dyn Fn(&mut dyn ResponseWriter, Request<Body>, DecodeError) + Send + Sync>;

/// Replies `400 Bad Request` with the error text.
pub fn default_error_handler(
    w: &mut dyn ResponseWriter,
    _req: Request<Body>,
    err: DecodeError,
) {
    http_error(w, &err.to_string(), StatusCode::BAD_REQUEST);
}

pub fn default_handler() -> ErrorHandler {
    Arc::new(default_error_handler)
}
