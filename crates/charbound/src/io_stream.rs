//! Adapter from `std::io` byte readers to [`CharStream`].

use alloc::vec::Vec;
use std::io::{BufRead, ErrorKind};

use crate::{CharStream, StreamError, check_window};

const REPLACEMENT: char = '\u{FFFD}';

/// Decodes UTF-8 from any [`BufRead`] into characters.
///
/// Invalid or truncated sequences decode to U+FFFD. Mark and reset are not
/// supported. After [`close`](CharStream::close) every operation except
/// `close` fails with [`StreamError::Closed`]; the wrapped reader is dropped
/// only when the adapter is.
#[derive(Debug)]
pub struct IoStream<R> {
    reader: R,
    /// Bytes pulled from `reader` but not yet decoded, from `start`.
    pending: Vec<u8>,
    start: usize,
    closed: bool,
}

impl<R: BufRead> IoStream<R> {
    /// Wraps `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            start: 0,
            closed: false,
        }
    }

    /// Unwraps the adapter. Bytes already pulled from the reader but not yet
    /// decoded are lost.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn ensure_open(&self) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        Ok(())
    }

    /// Decodes one character from the pending bytes without doing I/O.
    /// Returns `None` when more bytes are needed.
    fn decode_pending(&mut self, at_eof: bool) -> Option<char> {
        let bytes = &self.pending[self.start..];
        if bytes.is_empty() {
            return None;
        }
        let (ch, size) = bstr::decode_utf8(bytes);
        match ch {
            Some(c) => {
                self.start += size;
                Some(c)
            }
            // An incomplete prefix spans the whole pending tail; anything
            // shorter is a genuinely invalid sequence.
            None if at_eof || size < bytes.len() => {
                self.start += size.max(1);
                Some(REPLACEMENT)
            }
            None => None,
        }
    }

    /// Whether `decode_pending(false)` would yield a char without I/O.
    fn has_decodable(&self) -> bool {
        let bytes = &self.pending[self.start..];
        if bytes.is_empty() {
            return false;
        }
        let (ch, size) = bstr::decode_utf8(bytes);
        ch.is_some() || size < bytes.len()
    }

    /// Pulls the next chunk from the reader. Returns `false` at end of input.
    fn fill(&mut self) -> Result<bool, StreamError> {
        let n = loop {
            match self.reader.fill_buf() {
                Ok([]) => return Ok(false),
                Ok(chunk) => {
                    self.pending.drain(..self.start);
                    self.start = 0;
                    self.pending.extend_from_slice(chunk);
                    break chunk.len();
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        };
        self.reader.consume(n);
        Ok(true)
    }

    fn next_char(&mut self) -> Result<Option<char>, StreamError> {
        loop {
            if let Some(c) = self.decode_pending(false) {
                return Ok(Some(c));
            }
            if !self.fill()? {
                return Ok(self.decode_pending(true));
            }
        }
    }
}

impl<R: BufRead> CharStream for IoStream<R> {
    fn read_char(&mut self) -> Result<Option<char>, StreamError> {
        self.ensure_open()?;
        self.next_char()
    }

    fn read_into(
        &mut self,
        buf: &mut [char],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, StreamError> {
        self.ensure_open()?;
        check_window(buf.len(), offset, len)?;
        if len == 0 {
            return Ok(Some(0));
        }
        let Some(first) = self.next_char()? else {
            return Ok(None);
        };
        buf[offset] = first;
        let mut n = 1;
        // Only block for the first character; the rest come from bytes
        // already in hand.
        while n < len {
            let Some(c) = self.decode_pending(false) else {
                break;
            };
            buf[offset + n] = c;
            n += 1;
        }
        Ok(Some(n))
    }

    fn ready(&mut self) -> Result<bool, StreamError> {
        self.ensure_open()?;
        Ok(self.has_decodable())
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.closed = true;
        self.pending.clear();
        self.start = 0;
        Ok(())
    }
}
