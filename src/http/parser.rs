use log::debug;
use thiserror::Error;

use crate::http::headers::Headers;
use crate::http::request::{Request, RequestLine};
use crate::http::{Method, find_crlf};

const SUPPORTED_VERSION: &str = "1.1";

/// Errors that abort parsing of a request.
/// None of them is recoverable: the stream is not resynchronized.
#[derive(Debug, Error)]
pub enum ParserError {
    // Malformed request line
    #[error("incorrectly formatted request line: {0}")]
    MalformedRequestLine(String),

    #[error("method is not a valid http verb: {0}")]
    InvalidMethod(String),

    #[error("invalid http version: {0}")]
    InvalidVersion(String),

    // Well-formed version other than 1.1
    #[error("unsupported version: {0}, only 1.1 is supported")]
    UnsupportedVersion(String),

    // Malformed header line
    #[error("no key/value separator in header line: {0}")]
    MissingHeaderSeparator(String),

    #[error("invalid header key: {0}")]
    InvalidHeaderKey(String),

    #[error("data received in done state")]
    DataInDoneState,

    #[error("request head does not fit in {0} bytes")]
    BufferLimitExceeded(usize),

    #[error("stream ended before a complete request line")]
    IncompleteRequestLine,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParserError {
    /// True for errors caused by malformed request or header lines.
    /// An unsupported version is a recognized request, not a malformed one.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ParserError::MalformedRequestLine(_)
                | ParserError::InvalidMethod(_)
                | ParserError::InvalidVersion(_)
                | ParserError::MissingHeaderSeparator(_)
                | ParserError::InvalidHeaderKey(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Initialized,
    ParsingHeaders,
    Done,
}

/// Incremental request parser.
///
/// Each call to [`RequestParser::parse`] looks at the front of the pending
/// bytes and advances by at most one line. It only ever consumes whole lines,
/// so the caller keeps the unconsumed tail and hands it back together with
/// the next bytes read from the stream.
#[derive(Debug)]
pub struct RequestParser {
    state: ParserState,
    request_line: Option<RequestLine>,
    headers: Headers,
}

impl Default for RequestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::Initialized,
            request_line: None,
            headers: Headers::new(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    /// Feeds the pending bytes and returns how many were consumed.
    /// `Ok(0)` means more data is needed before anything can be parsed.
    pub fn parse(&mut self, data: &[u8]) -> Result<usize, ParserError> {
        match self.state {
            ParserState::Initialized => match parse_request_line(data)? {
                Some((request_line, n)) => {
                    debug!(
                        "request line parsed: {} {}",
                        request_line.method, request_line.request_target
                    );
                    self.request_line = Some(request_line);
                    self.state = ParserState::ParsingHeaders;
                    Ok(n)
                }
                None => Ok(0),
            },
            ParserState::ParsingHeaders => {
                let (n, done) = self.headers.parse(data)?;
                if done {
                    debug!("header block complete, {} headers", self.headers.len());
                    self.state = ParserState::Done;
                }
                Ok(n)
            }
            ParserState::Done => Err(ParserError::DataInDoneState),
        }
    }

    /// Marks the request as complete, e.g. once the stream has ended.
    pub fn force_done(&mut self) {
        if self.state != ParserState::Done {
            debug!("forcing done from {:?}", self.state);
            self.state = ParserState::Done;
        }
    }

    /// Returns the parsed request. Fails if no request line was parsed.
    pub fn finish(self) -> Result<Request, ParserError> {
        let request_line = self
            .request_line
            .ok_or(ParserError::IncompleteRequestLine)?;

        Ok(Request {
            request_line,
            headers: self.headers,
        })
    }
}

/// Parses the request line at the front of `data`.
///
/// Returns `Ok(None)` while no CRLF is buffered. On success the second
/// element is the number of bytes used, terminator included.
pub fn parse_request_line(data: &[u8]) -> Result<Option<(RequestLine, usize)>, ParserError> {
    let line_end = match find_crlf(data) {
        Some(i) => i,
        None => return Ok(None),
    };

    let line = std::str::from_utf8(&data[..line_end]).map_err(|_| {
        ParserError::MalformedRequestLine(String::from_utf8_lossy(&data[..line_end]).into_owned())
    })?;

    let parts: Vec<&str> = line.split(' ').collect();
    let [method, target, version] = parts.as_slice() else {
        return Err(ParserError::MalformedRequestLine(line.to_string()));
    };

    let method = Method::from_bytes(method.as_bytes())
        .ok_or_else(|| ParserError::InvalidMethod(method.to_string()))?;

    let version = parse_version(version)?;
    if version != SUPPORTED_VERSION {
        return Err(ParserError::UnsupportedVersion(version.to_string()));
    }

    let request_line = RequestLine {
        method,
        request_target: target.to_string(),
        http_version: version.to_string(),
    };

    Ok(Some((request_line, line_end + 2)))
}

/// Checks `HTTP/<digit>.<digit>` and returns the `<digit>.<digit>` part
fn parse_version(token: &str) -> Result<&str, ParserError> {
    let invalid = || ParserError::InvalidVersion(token.to_string());

    let version = token.strip_prefix("HTTP/").ok_or_else(invalid)?;
    match version.as_bytes() {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => Ok(version),
        _ => Err(invalid()),
    }
}
