//! HTTP header block for [`Request`](crate::http::request::Request)
//!
//! Header names are normalized to lowercase when they are stored, so lookups
//! through [`Headers::get`] are case-insensitive. A name seen more than once
//! keeps a single entry whose value is every occurrence joined by `,` in the
//! order they arrived.
//!
//! Entries are kept in an ordered map: iteration yields names in the order of
//! their first occurrence.

use indexmap::IndexMap;

use crate::http::find_crlf;
use crate::http::parser::ParserError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    headers: IndexMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Parses at most one header line from the front of `data`.
    ///
    /// Returns the number of bytes consumed and whether the blank line ending
    /// the header block was reached. `(0, false)` means no full line is
    /// buffered yet. The blank line itself is consumed, so a finished block
    /// always reports 2 bytes.
    pub fn parse(&mut self, data: &[u8]) -> Result<(usize, bool), ParserError> {
        let line_end = match find_crlf(data) {
            Some(i) => i,
            None => return Ok((0, false)),
        };

        if line_end == 0 {
            return Ok((2, true));
        }

        let line = &data[..line_end];
        let separator = line
            .iter()
            .position(|&b| b == b':')
            .ok_or_else(|| ParserError::MissingHeaderSeparator(lossy(line)))?;

        let name = &line[..separator];
        if name.is_empty() || !name.iter().all(|&b| is_token_char(b)) {
            return Err(ParserError::InvalidHeaderKey(lossy(name)));
        }

        // token chars are ASCII, the name is valid UTF-8 from here on
        let name = lossy(name).to_ascii_lowercase();
        let value = lossy(&line[separator + 1..]);
        self.append(name, value.trim_matches(' '));

        Ok((line_end + 2, false))
    }

    /// Stores `value` under an already lowercased `name`, joining it to any
    /// previous value with a comma.
    fn append(&mut self, name: String, value: &str) {
        match self.headers.get_mut(&name) {
            Some(existing) => {
                existing.push(',');
                existing.push_str(value);
            }
            None => {
                self.headers.insert(name, value.to_string());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// `tchar` from RFC 9110
fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
