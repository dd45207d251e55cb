use alloc::vec::Vec;

use crate::{CharStream, StreamError, check_window};

/// An in-memory [`CharStream`] over the characters of a string.
///
/// Supports mark and reset; the read-ahead limit is ignored because the
/// whole input is always available. Without a prior mark, `reset` rewinds
/// to the start. After [`close`](CharStream::close) every operation except
/// `close` fails with [`StreamError::Closed`].
#[derive(Debug, Clone)]
pub struct StrStream {
    chars: Vec<char>,
    next: usize,
    mark: usize,
    closed: bool,
}

impl StrStream {
    /// Creates a stream over `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            next: 0,
            mark: 0,
            closed: false,
        }
    }

    /// Number of characters not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.next
    }

    fn ensure_open(&self) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        Ok(())
    }
}

impl CharStream for StrStream {
    fn read_char(&mut self) -> Result<Option<char>, StreamError> {
        self.ensure_open()?;
        let c = self.chars.get(self.next).copied();
        if c.is_some() {
            self.next += 1;
        }
        Ok(c)
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
        if self.next >= self.chars.len() {
            return Ok(None);
        }
        let n = len.min(self.remaining());
        buf[offset..offset + n].copy_from_slice(&self.chars[self.next..self.next + n]);
        self.next += n;
        Ok(Some(n))
    }

    fn skip(&mut self, n: u64) -> Result<u64, StreamError> {
        self.ensure_open()?;
        let n = usize::try_from(n).unwrap_or(usize::MAX).min(self.remaining());
        self.next += n;
        Ok(n as u64)
    }

    fn ready(&mut self) -> Result<bool, StreamError> {
        self.ensure_open()?;
        Ok(true)
    }

    fn mark_supported(&self) -> bool {
        true
    }

    fn mark(&mut self, _read_ahead_limit: usize) -> Result<(), StreamError> {
        self.ensure_open()?;
        self.mark = self.next;
        Ok(())
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        self.ensure_open()?;
        self.next = self.mark;
        Ok(())
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.closed = true;
        Ok(())
    }
}
