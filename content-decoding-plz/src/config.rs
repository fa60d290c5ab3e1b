//! Construction time configuration for [`Decode`](crate::Decode).

use std::sync::Arc;

use http::Request;
use zstd::zstd_safe::DParameter;

use crate::body::Body;
use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::error_handler::{ErrorHandler, default_handler};
use crate::registry::{Codec, resolve};
use crate::response::ResponseWriter;

/// Frozen configuration, shared read only by every request.
#[derive(Clone)]
pub struct Config {
    error_handler: ErrorHandler,
    decoders: Vec<Decoder>,
    zstd_params: Vec<DParameter>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_handler: default_handler(),
            decoders: Vec::new(),
            zstd_params: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn error_handler(&self) -> &ErrorHandler {
        &self.error_handler
    }

    pub fn decoders(&self) -> &[Decoder] {
        &self.decoders
    }

    pub fn zstd_params(&self) -> &[DParameter] {
        &self.zstd_params
    }

    pub fn resolve(&self, token: &str) -> Option<Codec<'_>> {
        resolve(token, &self.decoders)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("decoders", &self.decoders)
            .field("zstd_params", &self.zstd_params)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Config`]. Later calls override earlier ones.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the handler called when decoding fails.
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut dyn ResponseWriter, Request<Body>, DecodeError)
            + Send
            + Sync
            + 'static,
    {
        self.config.error_handler = Arc::new(handler);
        self
    }

    /// `None` restores the default handler.
    pub fn maybe_error_handler(mut self, handler: Option<ErrorHandler>) -> Self {
        self.config.error_handler = handler.unwrap_or_else(default_handler);
        self
    }

    /// Set the custom decoders, replacing previously set ones.
    pub fn decoders<I>(mut self, decoders: I) -> Self
    where
        I: IntoIterator<Item = Decoder>,
    {
        self.config.decoders = decoders.into_iter().collect();
        self
    }

    /// Parameters applied to every zstd decoder, replacing previously set
    /// ones.
    pub fn zstd_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = DParameter>,
    {
        self.config.zstd_params = params.into_iter().collect();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
