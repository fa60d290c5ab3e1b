use http::Request;
use tracing::debug;
use zstd::zstd_safe::DParameter;

use crate::body::Body;
use crate::content_encoding::ContentEncoding;
use crate::decoder::Decoder;
use crate::decompressors::decompress;
use crate::error::DecodeError;
use crate::response::ResponseWriter;

#[derive(Clone, Copy, Debug)]
pub enum Codec<'a> {
    Builtin(ContentEncoding),
    Custom(&'a Decoder),
}

/* Built-ins are matched first, so a custom decoder registered for a
 * built-in token ("gzip") is never reached.
 * Custom decoders are matched in registration order, first match wins.
 * None => unknown token, skipped by the caller.
 */
pub fn resolve<'a>(token: &str, decoders: &'a [Decoder]) -> Option<Codec<'a>> {
    if let Some(encoding) = ContentEncoding::from_token(token) {
        return Some(Codec::Builtin(encoding));
    }
    decoders
        .iter()
        .find(|decoder| decoder.encoding() == token)
        .map(Codec::Custom)
}

impl Codec<'_> {
    pub fn encoding(&self) -> &str {
        match self {
            Codec::Builtin(encoding) => encoding.as_ref(),
            Codec::Custom(decoder) => decoder.encoding(),
        }
    }

    // Replaces the request body with one decoded by this codec.
    pub fn apply(
        &self,
        w: &mut dyn ResponseWriter,
        req: &mut Request<Body>,
        zstd_params: &[DParameter],
    ) -> Result<(), DecodeError> {
        match self {
            Codec::Builtin(ContentEncoding::Identity) => Ok(()),
            Codec::Builtin(encoding) => {
                let body = std::mem::take(req.body_mut());
                *req.body_mut() = decompress(body, *encoding, zstd_params)?;
                debug!("{}| decoder installed", self.encoding());
                Ok(())
            }
            Codec::Custom(decoder) => decoder
                .decode(w, req)
                .map_err(|e| DecodeError::custom(decoder.encoding(), e)),
        }
    }
}
