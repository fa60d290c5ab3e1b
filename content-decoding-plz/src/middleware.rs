use std::sync::Arc;

use http::header::CONTENT_ENCODING;
use http::{Method, Request};
use tracing::{debug, trace, warn};

use crate::accept_encoding::AcceptEncoding;
use crate::body::Body;
use crate::config::Config;
use crate::error::DecodeError;
use crate::handler::Handler;
use crate::response::ResponseWriter;
use crate::tokenizer::{header_value, split_encoding_header};

/// Request body decoding middleware.
///
/// Decodes the body of every request that is not `GET` or `HEAD` according
/// to its `Content-Encoding`, sets `Accept-Encoding` on the response and
/// calls the next handler. `br`, `gzip` (`x-gzip`) and `zstd` are built in,
/// more can be added with [`Decoder`](crate::Decoder)s.
///
/// ```rust,no_run
/// use content_decoding_plz::{Body, Decode, Handler, Recorder, ResponseWriter};
/// use http::Request;
///
/// let handler = Decode::new().wrap(|_w: &mut dyn ResponseWriter, req: Request<Body>| {
///     let decoded = req.into_body().collect();
/// });
/// let mut rec = Recorder::new();
/// handler.serve(&mut rec, Request::post("/").body(Body::from("hello")).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Decode {
    config: Arc<Config>,
    accept_encoding: Arc<AcceptEncoding>,
}

impl Decode {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let accept_encoding = AcceptEncoding::new(config.decoders());
        Decode {
            config: Arc::new(config),
            accept_encoding: Arc::new(accept_encoding),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encodings advertised in `Accept-Encoding`.
    pub fn encodings(&self) -> &[String] {
        self.accept_encoding.encodings()
    }

    pub fn wrap<H>(&self, next: H) -> DecodeHandler<H>
    where
        H: Handler,
    {
        DecodeHandler {
            decode: self.clone(),
            next,
        }
    }

    /* Walks the tokens last to first, the last applied encoding is the
     * outermost one.
     * Stops at the first error, the body is left as it was at that point.
     */
    pub fn decode_body(
        &self,
        w: &mut dyn ResponseWriter,
        req: &mut Request<Body>,
    ) -> Result<(), DecodeError> {
        let Some(raw) = header_value(req.headers(), &CONTENT_ENCODING) else {
            return Ok(());
        };
        let tokens = split_encoding_header(&raw);
        for token in tokens.iter().rev() {
            let Some(codec) = self.config.resolve(token) else {
                trace!("unknown encoding| {}", token);
                continue;
            };
            codec.apply(w, req, self.config.zstd_params())?;
        }
        Ok(())
    }
}

impl Default for Decode {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Handler`] returned by [`Decode::wrap`].
#[derive(Clone, Debug)]
pub struct DecodeHandler<H> {
    decode: Decode,
    next: H,
}

impl<H> DecodeHandler<H> {
    pub fn next(&self) -> &H {
        &self.next
    }
}

// GET and HEAD carry no body
fn is_read_only(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}

impl<H> Handler for DecodeHandler<H>
where
    H: Handler,
{
    fn serve(&self, w: &mut dyn ResponseWriter, mut req: Request<Body>) {
        if is_read_only(req.method()) {
            trace!("{}| skip", req.method());
            return self.next.serve(w, req);
        }
        if let Err(e) = self.decode.decode_body(w, &mut req) {
            warn!("decode| {}| {}", req.uri(), e);
            return (self.decode.config.error_handler())(w, req, e);
        }
        self.decode.accept_encoding.apply(w);
        debug!("{}| decoded", req.uri());
        self.next.serve(w, req);
    }
}
