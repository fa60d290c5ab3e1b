pub const BROTLI: &str = "br";
pub const GZIP: &str = "gzip";
pub const X_GZIP: &str = "x-gzip";
pub const ZSTD: &str = "zstd";
pub const IDENTITY: &str = "identity";

// Advertised in Accept-Encoding, in this order.
pub const SUPPORTED: [ContentEncoding; 3] = [
    ContentEncoding::Brotli,
    ContentEncoding::Gzip,
    ContentEncoding::Zstd,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentEncoding {
    Brotli,
    Gzip,
    Zstd,
    Identity,
}

impl ContentEncoding {
    // None => not a built-in token
    pub fn from_token(token: &str) -> Option<Self> {
        use ContentEncoding::*;
        match token {
            BROTLI => Some(Brotli),
            GZIP | X_GZIP => Some(Gzip),
            ZSTD => Some(Zstd),
            "" | IDENTITY => Some(Identity),
            _ => None,
        }
    }
}

impl AsRef<str> for ContentEncoding {
    fn as_ref(&self) -> &str {
        use ContentEncoding::*;
        match self {
            Brotli => BROTLI,
            Gzip => GZIP,
            Zstd => ZSTD,
            Identity => IDENTITY,
        }
    }
}
