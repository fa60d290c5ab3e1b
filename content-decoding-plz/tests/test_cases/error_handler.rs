use super::*;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_default_error_handler() {
    let handler = Decode::new().wrap(echo);
    let rec = serve(&handler, post("gzip", INPUT));
    assert_eq!(rec.status(), StatusCode::BAD_REQUEST);
    assert_eq!(rec.body(), b"gzip| invalid gzip header\n");
    assert_eq!(rec.header("content-type"), Some("text/plain; charset=utf-8"));
    assert_eq!(rec.header(ACCEPT_ENCODING.as_str()), None);
}

#[test]
fn test_default_error_handler_zstd() {
    let handler = Decode::new().wrap(echo);
    let rec = serve(&handler, post("zstd", "test"));
    assert_eq!(rec.status(), StatusCode::BAD_REQUEST);
    assert_eq!(rec.body(), b"zstd| invalid zstd header\n");
}

#[test]
fn test_default_error_handler_empty_body() {
    let handler = Decode::new().wrap(echo);
    let rec = serve(&handler, post("gzip", Body::empty()));
    assert_eq!(rec.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_error_handler_next_not_called() {
    let calls = Arc::new(AtomicUsize::new(0));
    let next_calls = calls.clone();
    let next = move |w: &mut dyn ResponseWriter, _req: Request<Body>| {
        next_calls.fetch_add(1, Ordering::SeqCst);
        w.write_all(b"from next").unwrap();
    };
    let handler = Decode::new().wrap(next);
    let rec = serve(&handler, post("gzip", INPUT));
    assert_eq!(rec.status(), StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(rec.body(), b"gzip| invalid gzip header\n");
}

#[test]
fn test_error_handler_custom_status() {
    let config = Config::builder()
        .error_handler(|w: &mut dyn ResponseWriter, _req, _err| {
            w.write_status(StatusCode::from_u16(999).unwrap());
        })
        .build();
    let handler = Decode::with_config(config).wrap(noop);
    let rec = serve(&handler, post("gzip", INPUT));
    assert_eq!(rec.status().as_u16(), 999);
    assert!(rec.body().is_empty());
}

#[test]
fn test_error_handler_called_once_with_error() {
    let calls = Arc::new(AtomicUsize::new(0));
    let inner = calls.clone();
    let config = Config::builder()
        .error_handler(move |w: &mut dyn ResponseWriter, req: Request<Body>, err| {
            inner.fetch_add(1, Ordering::SeqCst);
            assert_eq!(req.method(), Method::POST);
            assert!(matches!(err, DecodeError::Zstd(_)));
            w.write_status(StatusCode::UNPROCESSABLE_ENTITY);
        })
        .build();
    let handler = Decode::with_config(config).wrap(noop);
    // gzip layer is never attempted
    let rec = serve(&handler, post("gzip, zstd, zstd", "test"));
    assert_eq!(rec.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_error_handler_writes_nothing() {
    let config = Config::builder()
        .error_handler(|_w: &mut dyn ResponseWriter, _req, _err| {})
        .build();
    let handler = Decode::with_config(config).wrap(echo);
    let rec = serve(&handler, post("gzip", INPUT));
    assert!(!rec.is_status_written());
    assert!(rec.body().is_empty());
}

#[test]
fn test_error_handler_reset_to_default() {
    let config = Config::builder()
        .error_handler(|w: &mut dyn ResponseWriter, _req, _err| {
            w.write_status(StatusCode::IM_A_TEAPOT);
        })
        .maybe_error_handler(None)
        .build();
    let handler = Decode::with_config(config).wrap(noop);
    let rec = serve(&handler, post("gzip", INPUT));
    assert_eq!(rec.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_error_handler_shared() {
    let shared: ErrorHandler = Arc::new(
        |w: &mut dyn ResponseWriter, _req: Request<Body>, _err: DecodeError| {
            w.write_status(StatusCode::IM_A_TEAPOT);
        },
    );
    let config = Config::builder().maybe_error_handler(Some(shared)).build();
    let handler = Decode::with_config(config).wrap(noop);
    let rec = serve(&handler, post("zstd", "test"));
    assert_eq!(rec.status(), StatusCode::IM_A_TEAPOT);
}

#[test]
fn test_error_handler_builtin_body_consumed() {
    let config = Config::builder()
        .error_handler(|w: &mut dyn ResponseWriter, req: Request<Body>, _err| {
            let body = req.into_body().collect().unwrap();
            w.write_all(&body).unwrap();
        })
        .build();
    let handler = Decode::with_config(config).wrap(noop);
    let rec = serve(&handler, post("gzip", INPUT));
    assert!(rec.body().is_empty());
}
