use std::io::{Cursor, Read, copy, empty};

use bytes::{Buf, BufMut, Bytes, BytesMut};

// Owned request body stream. Every decode step moves the previous stream
// into the reader that replaces it.
pub struct Body {
    inner: Box<dyn Read + Send>,
}

impl Body {
    pub fn new<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Body {
            inner: Box::new(reader),
        }
    }

    pub fn empty() -> Self {
        Body::new(empty())
    }

    // Read the rest of the stream. Lazy codecs surface their errors here.
    pub fn collect(mut self) -> std::io::Result<Bytes> {
        let mut writer = BytesMut::new().writer();
        copy(&mut self, &mut writer)?;
        Ok(writer.into_inner().freeze())
    }

    // Read `len` bytes and put them back in front of the stream.
    pub(crate) fn peek(mut self, len: usize) -> std::io::Result<(Vec<u8>, Body)> {
        let mut head = vec![0; len];
        self.read_exact(&mut head)?;
        let body = Body::new(Read::chain(Cursor::new(head.clone()), self));
        Ok((head, body))
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::empty()
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body").finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for Body {
    fn from(data: Vec<u8>) -> Self {
        Body::new(Cursor::new(data))
    }
}

impl From<&'static [u8]> for Body {
    fn from(data: &'static [u8]) -> Self {
        Body::new(data)
    }
}

impl From<&'static str> for Body {
    fn from(data: &'static str) -> Self {
        Body::new(data.as_bytes())
    }
}

impl From<String> for Body {
    fn from(data: String) -> Self {
        Body::from(data.into_bytes())
    }
}

impl From<Bytes> for Body {
    fn from(data: Bytes) -> Self {
        Body::new(data.reader())
    }
}

impl From<BytesMut> for Body {
    fn from(data: BytesMut) -> Self {
        Body::from(data.freeze())
    }
}
