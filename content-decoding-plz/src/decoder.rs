use std::sync::Arc;

use http::Request;

use crate::body::Body;
use crate::error::BoxError;
use crate::response::ResponseWriter;

pub type DecodeFn = dyn Fn(&mut dyn ResponseWriter, &mut Request<Body>) -> Result<(), BoxError>
    + Send
    + Sync;

/// Decoder for a user defined `Content-Encoding`.
///
/// When a token of the request's `Content-Encoding` equals `encoding`, the
/// handler is called with the request. It is expected to replace the body
/// with a decoded one, or return an error.
#[derive(Clone)]
pub struct Decoder {
    encoding: String,
    handler: Arc<DecodeFn>,
}

impl Decoder {
    pub fn new<F>(encoding: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut dyn ResponseWriter, &mut Request<Body>) -> Result<(), BoxError>
            + Send
            + Sync
            + 'static,
    {
        Decoder {
            encoding: encoding.into(),
            handler: Arc::new(handler),
        }
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn decode(
        &self,
        w: &mut dyn ResponseWriter,
        req: &mut Request<Body>,
    ) -> Result<(), BoxError> {
        (self.handler)(w, req)
    }
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}
