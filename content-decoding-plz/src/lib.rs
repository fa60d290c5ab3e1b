//! `Content-Encoding` request decoding for blocking HTTP handlers.
//!
//! [`Decode`] wraps a [`Handler`]. For requests other than `GET` and `HEAD`
//! the body is decoded layer by layer, last listed encoding first, before
//! the wrapped handler is called. `br`, `gzip` / `x-gzip` and `zstd` are
//! built in; other encodings can be handled with custom [`Decoder`]s and
//! unknown ones are left as is. Failures go to an [`ErrorHandler`], which by
//! default replies `400 Bad Request`.
//!
//! The response `Accept-Encoding` lists the decodable encodings, merged with
//! any value set by earlier middleware.
pub mod accept_encoding;
mod body;
pub mod config;
pub mod content_encoding;
mod decoder;
pub mod decompressors;
mod error;
mod error_handler;
mod handler;
pub mod magic_bytes;
mod middleware;
pub mod registry;
mod response;
pub mod tokenizer;

pub use body::Body;
pub use config::{Config, ConfigBuilder};
pub use decoder::Decoder;
pub use error::{BoxError, DecodeError};
pub use error_handler::{ErrorHandler, default_error_handler};
pub use handler::Handler;
pub use middleware::{Decode, DecodeHandler};
pub use response::{Recorder, ResponseWriter, http_error};
pub use zstd::zstd_safe::DParameter;
