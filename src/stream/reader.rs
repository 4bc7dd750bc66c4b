//! Read loops turning a byte stream into a [`Request`].
//!
//! The stream may hand out data in chunks of any size, down to a single
//! byte per read. Each loop iteration:
//!
//! 1. grows the [`ReadBuffer`] if it is full,
//! 2. performs one read into its free space,
//! 3. feeds the pending bytes to the [`RequestParser`] until it stops
//!    consuming, compacting the buffer after every step,
//! 4. on end-of-stream, marks the parser done and stops.
//!
//! End-of-stream is not an error by itself. It only fails the parse when no
//! complete request line was received.

use async_std::io::ReadExt;
use log::{debug, trace};
use std::io::{ErrorKind, Read};

use crate::config::{ParserConfig, config};
use crate::http::parser::{ParserError, RequestParser};
use crate::http::request::Request;
use crate::stream::buffer::ReadBuffer;

/// Parses a request from a blocking reader using the process-wide config
pub fn request_from_reader<R: Read>(reader: R) -> Result<Request, ParserError> {
    request_from_reader_with(reader, config())
}

pub fn request_from_reader_with<R: Read>(
    mut reader: R,
    cfg: &ParserConfig,
) -> Result<Request, ParserError> {
    let mut parser = RequestParser::new();
    let mut buffer = ReadBuffer::new(cfg);

    while !parser.is_done() {
        let n = match Read::read(&mut reader, buffer.spare()?) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ParserError::Io(e)),
        };

        if step(&mut parser, &mut buffer, n)? {
            break;
        }
    }

    parser.finish()
}

/// Parses a request from an async-std reader using the process-wide config
pub async fn request_from_async_reader<R>(reader: R) -> Result<Request, ParserError>
where
    R: async_std::io::Read + Unpin,
{
    request_from_async_reader_with(reader, config()).await
}

pub async fn request_from_async_reader_with<R>(
    mut reader: R,
    cfg: &ParserConfig,
) -> Result<Request, ParserError>
where
    R: async_std::io::Read + Unpin,
{
    let mut parser = RequestParser::new();
    let mut buffer = ReadBuffer::new(cfg);

    while !parser.is_done() {
        let n = match ReadExt::read(&mut reader, buffer.spare()?).await {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ParserError::Io(e)),
        };

        if step(&mut parser, &mut buffer, n)? {
            break;
        }
    }

    parser.finish()
}

/// Accounts for a read of `n` bytes and parses what it made available.
/// Returns true once the stream has ended.
fn step(parser: &mut RequestParser, buffer: &mut ReadBuffer, n: usize) -> Result<bool, ParserError> {
    buffer.advance(n);
    trace!("read {n} bytes, {} pending", buffer.pending().len());

    drain(parser, buffer)?;

    if n == 0 {
        debug!(
            "end of stream in state {:?}, {} bytes left unparsed",
            parser.state(),
            buffer.pending().len()
        );
        parser.force_done();
        return Ok(true);
    }

    Ok(false)
}

/// Parses line after line until the parser needs more data or is done
fn drain(parser: &mut RequestParser, buffer: &mut ReadBuffer) -> Result<(), ParserError> {
    while !parser.is_done() {
        let consumed = parser.parse(buffer.pending())?;
        if consumed == 0 {
            break;
        }
        trace!("parser consumed {consumed} bytes");
        buffer.consume(consumed);
    }
    Ok(())
}
