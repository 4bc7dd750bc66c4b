use crate::http::Method;
use crate::http::headers::Headers;

/// Start line of a request: `METHOD SP TARGET SP HTTP/1.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Taken verbatim from the request line, not validated
    pub request_target: String,
    /// Numeric part of the version token, e.g. `"1.1"`
    pub http_version: String,
}

/// A fully parsed request head, produced by
/// [`RequestParser::finish`](crate::http::parser::RequestParser::finish).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub request_line: RequestLine,
    pub headers: Headers,
}

impl Request {
    pub fn method(&self) -> Method {
        self.request_line.method
    }

    pub fn target(&self) -> &str {
        &self.request_line.request_target
    }
}
