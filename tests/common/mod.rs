#![allow(dead_code)]

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

pub const COFFEE: &str = "GET /coffee HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\nAccept: */*\r\n\r\n";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Hands out at most `bytes_per_read` bytes per read
pub struct ChunkReader {
    data: Vec<u8>,
    bytes_per_read: usize,
    pos: usize,
}

impl ChunkReader {
    pub fn new(data: impl Into<Vec<u8>>, bytes_per_read: usize) -> Self {
        Self {
            data: data.into(),
            bytes_per_read,
            pos: 0,
        }
    }

    fn next_chunk(&mut self, buf: &mut [u8]) -> usize {
        let end = (self.pos + self.bytes_per_read).min(self.data.len());
        let n = (end - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        n
    }
}

impl io::Read for ChunkReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.next_chunk(buf))
    }
}

impl async_std::io::Read for ChunkReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Ok(self.get_mut().next_chunk(buf)))
    }
}
