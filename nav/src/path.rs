//! Location snapshots and the percent codec they rely on.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// RFC 3986 unreserved characters survive encoding untouched.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Percent-encode `raw` for use as a single URL component.
///
/// Encodes UTF-8 bytewise, so `/` becomes `%2F` and the result is safe inside
/// a query value or a path segment.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for &byte in raw.as_bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX_UPPER[usize::from(byte >> 4)]));
            out.push(char::from(HEX_UPPER[usize::from(byte & 0x0f)]));
        }
    }
    out
}

/// Decode a percent-encoded component.
///
/// Malformed sequences (a `%` not followed by two hex digits) pass through
/// literally and invalid UTF-8 decodes lossily, so decoding never fails.
#[must_use]
pub fn decode_component(raw: &str) -> String {
    decode_bytes(raw, false)
}

fn decode_bytes(raw: &str, plus_as_space: bool) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' if plus_as_space => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Decoded query parameters in document order.
///
/// The first occurrence wins on duplicate keys, and `+` reads as a space,
/// matching browser `URLSearchParams` behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse a raw query string. A leading `?` is tolerated and empty chunks
    /// between `&` separators are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut pairs = Vec::new();
        for chunk in raw.split('&') {
            if chunk.is_empty() {
                continue;
            }
            let (key, value) = match chunk.split_once('=') {
                Some((key, value)) => (key, value),
                None => (chunk, ""),
            };
            pairs.push((decode_bytes(key, true), decode_bytes(value, true)));
        }
        Self { pairs }
    }

    /// The first value bound to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the query carries no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// An immutable snapshot of one navigation attempt: the path the user is
/// trying to reach plus whatever query parameters came along.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub path: String,
    pub query: Query,
}

impl NavRequest {
    /// A request for `path` with no query parameters.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
        }
    }

    /// Parse a full location string such as `/login?redirect=%2Fsettings`.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        match location.split_once('?') {
            Some((path, raw_query)) => Self::from_parts(path, raw_query),
            None => Self::new(location),
        }
    }

    /// Build a request from an already-split path and raw query string, the
    /// shape browser location APIs hand out.
    #[must_use]
    pub fn from_parts(path: &str, raw_query: &str) -> Self {
        Self {
            path: path.to_owned(),
            query: Query::parse(raw_query),
        }
    }
}
