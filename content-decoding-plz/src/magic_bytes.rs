use crate::content_encoding::ContentEncoding;

// wiki - gzip -  1F 8B
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
// rfc 1952 - CM 8 = deflate, the only method defined
const GZIP_METHOD_DEFLATE: u8 = 0x08;
// ID1 ID2 CM FLG MTIME(4) XFL OS
pub const GZIP_HEADER_LEN: usize = 10;

// wiki - zstd - 28 B5 2F FD
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xb5, 0x2f, 0xfd];
// rfc 8878 - skippable frame - 0x184D2A50..=0x184D2A5F (little endian)
const ZSTD_SKIPPABLE_MAGIC_TAIL: [u8; 3] = [0x2a, 0x4d, 0x18];
pub const ZSTD_MAGIC_LEN: usize = ZSTD_MAGIC.len();

// Bytes needed to validate the start of a stream, 0 => nothing checked
pub fn header_len(encoding: &ContentEncoding) -> usize {
    match encoding {
        ContentEncoding::Gzip => GZIP_HEADER_LEN,
        ContentEncoding::Zstd => ZSTD_MAGIC_LEN,
        ContentEncoding::Brotli | ContentEncoding::Identity => 0,
    }
}

pub fn is_valid_header(input: &[u8], encoding: &ContentEncoding) -> bool {
    match encoding {
        ContentEncoding::Gzip => {
            matches!(
                input,
                [id1, id2, cm, ..]
                if [*id1, *id2] == GZIP_MAGIC && *cm == GZIP_METHOD_DEFLATE
            )
        }
        ContentEncoding::Zstd => {
            input.starts_with(&ZSTD_MAGIC)
                || matches!(
                    input,
                    [first, tail @ ..]
                    if *first & 0xf0 == 0x50
                        && tail.starts_with(&ZSTD_SKIPPABLE_MAGIC_TAIL)
                )
        }
        ContentEncoding::Brotli | ContentEncoding::Identity => true,
    }
}
