use std::fmt;

pub mod headers;
pub mod parser;
pub mod request;

/// Line terminator for the request line and every header line
pub(crate) const CRLF: &[u8] = b"\r\n";

/// Request methods accepted on the request line.
/// Matching is case-sensitive: `get` is not [`Method::Get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Head,
    Get,
    Options,
    Trace,
    Put,
    Delete,
    Post,
    Patch,
    Connect,
}

impl Method {
    pub fn from_bytes(method: &[u8]) -> Option<Method> {
        match method {
            b"HEAD" => Some(Method::Head),
            b"GET" => Some(Method::Get),
            b"OPTIONS" => Some(Method::Options),
            b"TRACE" => Some(Method::Trace),
            b"PUT" => Some(Method::Put),
            b"DELETE" => Some(Method::Delete),
            b"POST" => Some(Method::Post),
            b"PATCH" => Some(Method::Patch),
            b"CONNECT" => Some(Method::Connect),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of the first CRLF in `data`, if any
pub(crate) fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|w| w == CRLF)
}
