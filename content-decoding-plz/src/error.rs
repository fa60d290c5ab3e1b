use std::io::Error;
use thiserror::Error;

use crate::content_encoding::{GZIP, ZSTD};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("gzip| {0}")]
    Gzip(Error),
    #[error("zstd| {0}")]
    Zstd(Error),
    #[error("{encoding}| {source}")]
    Custom {
        encoding: String,
        source: BoxError,
    },
}

impl DecodeError {
    pub fn invalid_header(encoding: &str) -> Error {
        Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid {} header", encoding),
        )
    }

    pub fn custom(encoding: &str, source: BoxError) -> Self {
        DecodeError::Custom {
            encoding: encoding.to_string(),
            source,
        }
    }

    pub fn encoding(&self) -> &str {
        match self {
            DecodeError::Gzip(_) => GZIP,
            DecodeError::Zstd(_) => ZSTD,
            DecodeError::Custom { encoding, .. } => encoding,
        }
    }
}
