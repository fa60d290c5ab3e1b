use brotli::Decompressor;
use flate2::read::MultiGzDecoder;
use tracing::trace;
use zstd::zstd_safe::DParameter;

use crate::body::Body;
use crate::content_encoding::{ContentEncoding, GZIP, ZSTD};
use crate::error::DecodeError;
use crate::magic_bytes::{header_len, is_valid_header};

pub const BROTLI_BUFFER_SIZE: usize = 4096;

/* Brotli  | lazy  | errors surface when the body is read
 * Gzip    | eager | member header read and checked
 * Zstd    | eager | frame magic read and checked, params applied
 * Identity| noop
 */
pub fn decompress(
    body: Body,
    encoding: ContentEncoding,
    zstd_params: &[DParameter],
) -> Result<Body, DecodeError> {
    match encoding {
        ContentEncoding::Brotli => Ok(decompress_brotli(body)),
        ContentEncoding::Gzip => decompress_gzip(body),
        ContentEncoding::Zstd => decompress_zstd(body, zstd_params),
        ContentEncoding::Identity => Ok(body),
    }
}

pub fn decompress_brotli(body: Body) -> Body {
    Body::new(Decompressor::new(body, BROTLI_BUFFER_SIZE))
}

pub fn decompress_gzip(body: Body) -> Result<Body, DecodeError> {
    let body = validate_header(body, &ContentEncoding::Gzip, GZIP)
        .map_err(DecodeError::Gzip)?;
    Ok(Body::new(MultiGzDecoder::new(body)))
}

pub fn decompress_zstd(
    body: Body,
    params: &[DParameter],
) -> Result<Body, DecodeError> {
    let body = validate_header(body, &ContentEncoding::Zstd, ZSTD)
        .map_err(DecodeError::Zstd)?;
    let mut decoder =
        zstd::stream::read::Decoder::new(body).map_err(DecodeError::Zstd)?;
    for param in params {
        decoder.set_parameter(*param).map_err(DecodeError::Zstd)?;
    }
    Ok(Body::new(decoder))
}

fn validate_header(
    body: Body,
    encoding: &ContentEncoding,
    name: &str,
) -> std::io::Result<Body> {
    let (head, body) = body.peek(header_len(encoding))?;
    if !is_valid_header(&head, encoding) {
        trace!("{}| header| {:02x?}", name, head);
        return Err(DecodeError::invalid_header(name));
    }
    Ok(body)
}
