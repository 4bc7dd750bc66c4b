//! Incremental HTTP/1.1 request head parser.
//!
//! Bytes can arrive in arbitrarily small chunks: the request line and the
//! header block are parsed one complete line at a time out of a growable
//! buffer, so the result does not depend on how the transport fragments the
//! stream. Request bodies are not parsed.
//!
//! ```no_run
//! # fn main() -> Result<(), rustyreq::ParserError> {
//! let stream = std::net::TcpStream::connect("127.0.0.1:42069")?;
//! let req = rustyreq::request_from_reader(stream)?;
//! println!("{} {}", req.method(), req.target());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;
pub mod stream;

pub use config::ParserConfig;
pub use http::Method;
pub use http::headers::Headers;
pub use http::parser::{ParserError, ParserState, RequestParser};
pub use http::request::{Request, RequestLine};
pub use stream::reader::{
    request_from_async_reader, request_from_async_reader_with, request_from_reader,
    request_from_reader_with,
};
