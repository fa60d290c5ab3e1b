use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn suffix_decoder(encoding: &'static str) -> Decoder {
    Decoder::new(encoding, move |_w, req| {
        let body = std::mem::take(req.body_mut()).collect()?;
        let decoded = format!("{}-{}", String::from_utf8_lossy(&body), encoding);
        *req.body_mut() = Body::from(decoded);
        Ok(())
    })
}

fn custom_handler(decoders: Vec<Decoder>) -> impl Handler {
    let config = Config::builder().decoders(decoders).build();
    Decode::with_config(config).wrap(echo)
}

#[test]
fn test_custom_decoder() {
    let handler = custom_handler(vec![suffix_decoder("custom")]);
    let rec = serve(&handler, post("custom", "test"));
    assert_eq!(rec.status(), StatusCode::OK);
    assert_eq!(rec.body(), b"test-custom");
    assert_eq!(
        rec.header(ACCEPT_ENCODING.as_str()),
        Some("br, gzip, zstd, custom")
    );
}

// custom applied first, then gzip
#[test]
fn test_custom_decoder_stacked_with_builtin() {
    let handler = custom_handler(vec![suffix_decoder("custom")]);
    let rec = serve(&handler, post("custom, gzip", compress_gzip(b"test")));
    assert_eq!(rec.status(), StatusCode::OK);
    assert_eq!(rec.body(), b"test-custom");

    let rec = serve(&handler, post("custom, zstd", compress_zstd(b"test")));
    assert_eq!(rec.body(), b"test-custom");
}

// custom decoded first, mangles the gzip header
#[test]
fn test_custom_decoder_stacked_wrong_order() {
    let handler = custom_handler(vec![suffix_decoder("custom")]);
    let rec = serve(&handler, post("gzip, custom", compress_gzip(b"test")));
    assert_eq!(rec.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_custom_decoder_applied_per_token() {
    let handler =
        custom_handler(vec![suffix_decoder("a"), suffix_decoder("b")]);
    let rec = serve(&handler, post("a, b, a", "test"));
    assert_eq!(rec.body(), b"test-a-b-a");
    assert_eq!(
        rec.header(ACCEPT_ENCODING.as_str()),
        Some("br, gzip, zstd, a, b")
    );
}

#[test]
fn test_custom_decoder_first_match_wins() {
    let handler =
        custom_handler(vec![suffix_decoder("custom"), suffix_decoder("custom")]);
    let rec = serve(&handler, post("custom", "test"));
    assert_eq!(rec.body(), b"test-custom");
}

#[test]
fn test_custom_decoder_never_shadows_builtin() {
    let calls = Arc::new(AtomicUsize::new(0));
    let inner = calls.clone();
    let shadow = Decoder::new("gzip", move |_w, _req| {
        inner.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let handler = custom_handler(vec![shadow]);
    let rec = serve(&handler, post("gzip", compress_gzip(INPUT)));
    assert_eq!(rec.body(), INPUT);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // still advertised, as registered
    assert_eq!(
        rec.header(ACCEPT_ENCODING.as_str()),
        Some("br, gzip, zstd, gzip")
    );
}

#[test]
fn test_custom_decoder_error() {
    let failing = Decoder::new("custom", |_w, _req| Err("bad custom data".into()));
    let handler = custom_handler(vec![failing]);
    let rec = serve(&handler, post("custom", "test"));
    assert_eq!(rec.status(), StatusCode::BAD_REQUEST);
    assert_eq!(rec.body(), b"custom| bad custom data\n");
    assert_eq!(rec.header(ACCEPT_ENCODING.as_str()), None);
}

#[test]
fn test_custom_decoder_can_write_response() {
    let decoder = Decoder::new("custom", |w, _req| {
        w.headers_mut()
            .insert("x-decoded-by", HeaderValue::from_static("custom"));
        Ok(())
    });
    let handler = custom_handler(vec![decoder]);
    let rec = serve(&handler, post("custom", "test"));
    assert_eq!(rec.header("x-decoded-by"), Some("custom"));
    assert_eq!(rec.body(), b"test");
}
