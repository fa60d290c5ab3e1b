pub use bytes::BytesMut;
pub use content_decoding_plz::{Body, Recorder, ResponseWriter};
use content_decoding_plz::Handler;
use std::io::Write;

use flate2::Compression;
use http::header::CONTENT_ENCODING;
use http::{Method, Request, StatusCode};
use tracing_subscriber::filter::LevelFilter;

pub const INPUT: &[u8] = b"hello world";

pub const DEFAULT_ACCEPT_ENCODING: &str = "br, gzip, zstd";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn compress_brotli(data: &[u8]) -> Vec<u8> {
    let mut compressed = Vec::new();
    {
        let mut writer =
            brotli::CompressorWriter::new(&mut compressed, 4096, 0, 22);
        writer.write_all(data).unwrap();
        writer.flush().unwrap();
    }
    compressed
}

pub fn compress_gzip(data: &[u8]) -> Vec<u8> {
    let mut compressed = Vec::new();
    let mut encoder =
        flate2::write::GzEncoder::new(&mut compressed, Compression::fast());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap();
    compressed
}

pub fn compress_zstd(data: &[u8]) -> Vec<u8> {
    zstd::encode_all(data, 1).unwrap()
}

pub fn compress_zstd_with_window(data: &[u8], window_log: u32) -> Vec<u8> {
    let mut compressed = Vec::new();
    let mut encoder = zstd::stream::write::Encoder::new(&mut compressed, 1).unwrap();
    encoder.window_log(window_log).unwrap();
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap();
    compressed
}

pub fn compress(data: &[u8], encoding: &str) -> Vec<u8> {
    match encoding {
        "br" => compress_brotli(data),
        "gzip" | "x-gzip" => compress_gzip(data),
        "zstd" => compress_zstd(data),
        "identity" | "" => data.to_vec(),
        _ => panic!("no compressor for {}", encoding),
    }
}

/* "gzip, zstd" => gzip applied first, then zstd
 * matches the order a client lists the encodings it applied
 */
pub fn compress_all(data: &[u8], header: &str) -> Vec<u8> {
    header
        .split(',')
        .map(str::trim)
        .fold(data.to_vec(), |acc, encoding| compress(&acc, encoding))
}

pub fn request(
    method: Method,
    encoding: Option<&str>,
    body: impl Into<Body>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri("/");
    if let Some(encoding) = encoding {
        builder = builder.header(CONTENT_ENCODING, encoding);
    }
    builder.body(body.into()).unwrap()
}

pub fn post(encoding: &str, body: impl Into<Body>) -> Request<Body> {
    request(Method::POST, Some(encoding), body)
}

pub fn serve<H: Handler>(handler: &H, req: Request<Body>) -> Recorder {
    init_tracing();
    let mut rec = Recorder::new();
    handler.serve(&mut rec, req);
    rec
}

// Writes the decoded body back, 500 when the body can not be read
pub fn echo(w: &mut dyn ResponseWriter, req: Request<Body>) {
    match req.into_body().collect() {
        Ok(body) => w.write_all(&body).unwrap(),
        Err(e) => {
            w.write_status(StatusCode::INTERNAL_SERVER_ERROR);
            write!(w, "{}", e).unwrap();
        }
    }
}

pub fn noop(_w: &mut dyn ResponseWriter, _req: Request<Body>) {}
