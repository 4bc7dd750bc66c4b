use log::debug;

use crate::config::ParserConfig;
use crate::http::parser::ParserError;

/// Growable byte arena with a fill cursor.
///
/// Bytes in `buf[..filled]` have been read but not yet consumed by the
/// parser. Consumed bytes are always taken from the front, and the tail is
/// shifted back to index 0.
pub struct ReadBuffer {
    buf: Vec<u8>,
    filled: usize,
    max_size: Option<usize>,
}

impl ReadBuffer {
    pub fn new(cfg: &ParserConfig) -> Self {
        Self {
            buf: vec![0; cfg.initial_buffer_size.max(1)],
            filled: 0,
            max_size: cfg.max_buffer_size,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes read so far and not consumed yet
    pub fn pending(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    /// Free space to read into. Doubles the capacity first if the buffer is
    /// full, so the returned slice is never empty.
    pub fn spare(&mut self) -> Result<&mut [u8], ParserError> {
        if self.filled >= self.buf.len() {
            self.grow()?;
        }
        Ok(&mut self.buf[self.filled..])
    }

    /// Marks `n` bytes of the spare region as filled
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.filled + n <= self.buf.len());
        self.filled += n;
    }

    /// Drops `n` bytes from the front and moves the rest to the start
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.filled);
        self.buf.copy_within(n..self.filled, 0);
        self.filled -= n;
    }

    fn grow(&mut self) -> Result<(), ParserError> {
        let current = self.buf.len();
        let mut new_size = current * 2;
        if let Some(max) = self.max_size {
            if current >= max {
                return Err(ParserError::BufferLimitExceeded(max));
            }
            new_size = new_size.min(max);
        }

        debug!("growing read buffer from {current} to {new_size} bytes");
        self.buf.resize(new_size, 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(initial: usize, max: Option<usize>) -> ParserConfig {
        ParserConfig {
            initial_buffer_size: initial,
            max_buffer_size: max,
        }
    }

    fn fill(buffer: &mut ReadBuffer, data: &[u8]) {
        let spare = buffer.spare().unwrap();
        spare[..data.len()].copy_from_slice(data);
        buffer.advance(data.len());
    }

    #[test]
    fn consume_compacts_to_front() {
        let mut buffer = ReadBuffer::new(&config(8, None));
        fill(&mut buffer, b"abcdef");
        buffer.consume(4);
        assert_eq!(buffer.pending(), b"ef");
        assert_eq!(buffer.spare().unwrap().len(), 6);

        buffer.consume(2);
        assert!(buffer.pending().is_empty());
    }

    #[test]
    fn doubles_when_full() {
        let mut buffer = ReadBuffer::new(&config(4, None));
        fill(&mut buffer, b"abcd");
        assert_eq!(buffer.capacity(), 4);

        fill(&mut buffer, b"efgh");
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.pending(), b"abcdefgh");

        fill(&mut buffer, b"i");
        assert_eq!(buffer.capacity(), 16);
    }

    #[test]
    fn zero_initial_size_still_makes_room() {
        let mut buffer = ReadBuffer::new(&config(0, None));
        assert_eq!(buffer.spare().unwrap().len(), 1);
    }

    #[test]
    fn growth_stops_at_limit() {
        let mut buffer = ReadBuffer::new(&config(4, Some(6)));
        fill(&mut buffer, b"abcd");
        fill(&mut buffer, b"ef");
        assert_eq!(buffer.capacity(), 6);

        assert!(matches!(
            buffer.spare(),
            Err(ParserError::BufferLimitExceeded(6))
        ));
    }
}
