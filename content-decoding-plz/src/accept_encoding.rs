use std::collections::BTreeSet;

use http::HeaderValue;
use http::header::ACCEPT_ENCODING;
use tracing::warn;

use crate::content_encoding::SUPPORTED;
use crate::decoder::Decoder;
use crate::response::ResponseWriter;
use crate::tokenizer::{header_value, join_with_comma_space, split_encoding_header};

/// Encodings this server can decode, advertised in `Accept-Encoding`.
#[derive(Clone, Debug)]
pub struct AcceptEncoding {
    encodings: Vec<String>,
    joined: String,
}

impl AcceptEncoding {
    // built-ins first, custom decoders appended in registration order
    pub fn new(decoders: &[Decoder]) -> Self {
        let encodings: Vec<String> = SUPPORTED
            .iter()
            .map(|encoding| encoding.as_ref().to_string())
            .chain(decoders.iter().map(|d| d.encoding().to_string()))
            .collect();
        let joined = join_with_comma_space(&encodings);
        AcceptEncoding { encodings, joined }
    }

    pub fn encodings(&self) -> &[String] {
        &self.encodings
    }

    /* None | ""  => encodings as registered
     * current    => sorted union of current and encodings
     */
    pub fn negotiate(&self, current: Option<&str>) -> String {
        match current {
            None | Some("") => self.joined.clone(),
            Some(raw) => merge_accept_encoding(raw, &self.encodings),
        }
    }

    pub fn apply(&self, w: &mut dyn ResponseWriter) {
        let current = header_value(w.headers(), &ACCEPT_ENCODING);
        let value = self.negotiate(current.as_deref());
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                w.headers_mut().insert(ACCEPT_ENCODING, value);
            }
            Err(e) => warn!("accept encoding| {}| {}", value, e),
        }
    }
}

pub fn merge_accept_encoding(raw: &str, adds: &[String]) -> String {
    let current = split_encoding_header(raw);
    if current.is_empty() {
        return join_with_comma_space(adds);
    }
    let merged: BTreeSet<&str> = current
        .iter()
        .chain(adds)
        .map(String::as_str)
        .collect();
    let list: Vec<&str> = merged.into_iter().collect();
    join_with_comma_space(&list)
}
