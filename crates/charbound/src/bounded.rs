//! A [`CharStream`] decorator that caps how many characters can be read.
//!
//! [`BoundedReader`] keeps a remaining-character budget. Every character that
//! comes out of the wrapped stream is charged against it, and once it reaches
//! zero (or starts at zero or below) all non-empty reads report end of stream
//! without touching the wrapped stream. `mark` snapshots the budget and
//! `reset` refunds whatever was consumed since, so rewinding the wrapped
//! stream also rewinds the budget.
//!
//! The wrapper validates nothing itself. Errors from the wrapped stream,
//! including [`StreamError::Closed`] after `close`, propagate unchanged.

use crate::{BoundedReaderOptions, CharBuffer, CharStream, SkipPolicy, StreamError};

/// Limits the number of characters that can be read from a wrapped stream.
///
/// # Examples
///
/// ```rust
/// use charbound::{BoundedReader, CharStream, StrStream};
///
/// let mut reader = BoundedReader::new(StrStream::new("abcdef"), 4);
/// let mut buf = ['\0'; 8];
/// assert_eq!(reader.read_into(&mut buf, 0, 8).unwrap(), Some(4));
/// assert_eq!(reader.read_char().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct BoundedReader<S> {
    target: S,
    /// Remaining budget. May start at zero or below.
    max_chars_from_target: i64,
    /// Budget at the time of the last `mark`.
    max_char_pos: i64,
    /// Characters charged since construction, less any refunds.
    pos: u64,
    /// `pos` at the time of the last `mark`.
    marked_pos: u64,
    options: BoundedReaderOptions,
}

impl<S: CharStream> BoundedReader<S> {
    /// Wraps `target`, allowing at most `max_chars` characters to be read.
    ///
    /// A bound of zero or below is accepted and yields a reader that is
    /// exhausted from the start.
    #[must_use]
    pub fn new(target: S, max_chars: i64) -> Self {
        Self::with_options(target, max_chars, BoundedReaderOptions::default())
    }

    /// Like [`BoundedReader::new`] with explicit options.
    #[must_use]
    pub fn with_options(target: S, max_chars: i64, options: BoundedReaderOptions) -> Self {
        Self {
            target,
            max_chars_from_target: max_chars,
            max_char_pos: max_chars,
            pos: 0,
            marked_pos: 0,
            options,
        }
    }

    /// Remaining budget. Zero or negative means exhausted.
    #[must_use]
    pub fn remaining(&self) -> i64 {
        self.max_chars_from_target
    }

    /// Whether every non-empty read will report end of stream.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.max_chars_from_target <= 0
    }

    /// Characters read through the wrapper, net of refunds from `reset`.
    #[must_use]
    pub fn consumed(&self) -> u64 {
        self.pos
    }

    /// The options this reader was built with.
    #[must_use]
    pub fn options(&self) -> &BoundedReaderOptions {
        &self.options
    }

    /// Borrows the wrapped stream.
    #[must_use]
    pub fn get_ref(&self) -> &S {
        &self.target
    }

    /// Mutably borrows the wrapped stream. Reading from it directly bypasses
    /// the budget.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.target
    }

    /// Unwraps the reader, returning the wrapped stream.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.target
    }

    /// The budget as a read length, or `None` when exhausted.
    fn budget(&self) -> Option<usize> {
        if self.max_chars_from_target <= 0 {
            tracing::trace!(
                remaining = self.max_chars_from_target,
                "budget exhausted, reporting end of stream"
            );
            return None;
        }
        Some(usize::try_from(self.max_chars_from_target).unwrap_or(usize::MAX))
    }

    fn charge(&mut self, n: u64) {
        let n_signed = i64::try_from(n).unwrap_or(i64::MAX);
        self.max_chars_from_target = self.max_chars_from_target.saturating_sub(n_signed);
        self.pos += n;
    }
}

impl<S: CharStream> CharStream for BoundedReader<S> {
    fn read_char(&mut self) -> Result<Option<char>, StreamError> {
        if self.budget().is_none() {
            return Ok(None);
        }
        let c = self.target.read_char()?;
        if c.is_some() {
            self.charge(1);
        }
        Ok(c)
    }

    fn read_into(
        &mut self,
        buf: &mut [char],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, StreamError> {
        if len == 0 {
            return self.target.read_into(buf, offset, 0);
        }
        let Some(budget) = self.budget() else {
            return Ok(None);
        };
        let read = self.target.read_into(buf, offset, len.min(budget))?;
        if let Some(n) = read {
            self.charge(n as u64);
        }
        Ok(read)
    }

    fn read_buffer(&mut self, dst: &mut CharBuffer) -> Result<Option<usize>, StreamError> {
        let Some(budget) = self.budget() else {
            return Ok(None);
        };
        let limit = dst.limit();
        dst.set_limit(dst.position() + dst.remaining().min(budget));
        let read = self.target.read_buffer(dst);
        dst.set_limit(limit);
        let read = read?;
        if let Some(n) = read {
            self.charge(n as u64);
        }
        Ok(read)
    }

    fn skip(&mut self, n: u64) -> Result<u64, StreamError> {
        match self.options.skip_policy {
            SkipPolicy::Passthrough => self.target.skip(n),
            SkipPolicy::Charged => {
                if n == 0 {
                    return Ok(0);
                }
                let Some(budget) = self.budget() else {
                    return Ok(0);
                };
                let skipped = self.target.skip(n.min(budget as u64))?;
                self.charge(skipped);
                Ok(skipped)
            }
        }
    }

    fn ready(&mut self) -> Result<bool, StreamError> {
        if self.is_exhausted() {
            return Ok(false);
        }
        self.target.ready()
    }

    fn mark_supported(&self) -> bool {
        self.target.mark_supported()
    }

    fn mark(&mut self, read_ahead_limit: usize) -> Result<(), StreamError> {
        self.target.mark(read_ahead_limit)?;
        self.marked_pos = self.pos;
        self.max_char_pos = self.max_chars_from_target;
        tracing::debug!(
            read_ahead_limit,
            marked_pos = self.marked_pos,
            budget = self.max_char_pos,
            "marked"
        );
        Ok(())
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        self.target.reset()?;
        let refund = self.pos - self.marked_pos;
        self.max_chars_from_target = self
            .max_chars_from_target
            .saturating_add(i64::try_from(refund).unwrap_or(i64::MAX));
        self.pos = self.marked_pos;
        debug_assert_eq!(self.max_chars_from_target, self.max_char_pos);
        tracing::debug!(refund, budget = self.max_chars_from_target, "reset");
        Ok(())
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.target.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrStream;

    #[test]
    fn charges_each_character() {
        let mut reader = BoundedReader::new(StrStream::new("abc"), 5);
        assert_eq!(reader.read_char().unwrap(), Some('a'));
        assert_eq!(reader.remaining(), 4);
        assert_eq!(reader.consumed(), 1);
    }

    #[test]
    fn reset_without_mark_rewinds_to_construction() {
        let mut reader = BoundedReader::new(StrStream::new("abc"), 2);
        assert_eq!(reader.read_char().unwrap(), Some('a'));
        assert_eq!(reader.read_char().unwrap(), Some('b'));
        assert!(reader.is_exhausted());
        reader.reset().unwrap();
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.consumed(), 0);
        assert_eq!(reader.read_char().unwrap(), Some('a'));
    }

    #[test]
    fn failed_mark_leaves_state_untouched() {
        let mut reader = BoundedReader::new(StrStream::new("xy"), 3);
        reader.read_char().unwrap();
        reader.close().unwrap();
        assert!(reader.mark(1).unwrap_err().is_closed());
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.consumed(), 1);
    }

    #[test]
    fn into_inner_returns_target_position() {
        let mut reader = BoundedReader::new(StrStream::new("abc"), 1);
        reader.read_char().unwrap();
        let mut inner = reader.into_inner();
        assert_eq!(inner.read_char().unwrap(), Some('b'));
    }
}
