use http::HeaderMap;
use http::header::HeaderName;

pub const COMMA: char = ',';
pub const COMMA_SPACE: &str = ", ";

/* "gzip, zstd"   => ["gzip", "zstd"]
 * " br ,, gzip"  => ["br", "", "gzip"]
 * ""             => []
 */
pub fn split_encoding_header(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.split(COMMA).map(str::to_string).collect()
}

pub fn join_with_comma_space<S>(tokens: &[S]) -> String
where
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            joined.push_str(COMMA_SPACE);
        }
        joined.push_str(token.as_ref());
    }
    joined
}

// Multiple field lines are the same list as a single comma joined one.
// None when the header is absent.
pub fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    let mut values = headers.get_all(name).iter().peekable();
    values.peek()?;
    let joined = values
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    Some(joined)
}
