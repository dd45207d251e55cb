//! The [`CharStream`] capability trait.
//!
//! A `CharStream` is a blocking source of `char`s with the conventional
//! reader surface: single and bulk reads, skip, optional mark/reset, and
//! close. Decorators such as [`BoundedReader`](crate::BoundedReader) are
//! built by composition over this trait rather than by extending a concrete
//! reader.

use alloc::boxed::Box;

use crate::{CharBuffer, StreamError};

const SKIP_CHUNK: usize = 512;

/// A blocking source of characters.
///
/// Only [`read_char`](CharStream::read_char) and
/// [`read_into`](CharStream::read_into) are required. The remaining methods
/// have conservative defaults: mark and reset are unsupported, `skip` reads
/// and discards, `close` does nothing.
pub trait CharStream {
    /// Reads a single character, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Implementation-defined, e.g. [`StreamError::Closed`].
    fn read_char(&mut self) -> Result<Option<char>, StreamError>;

    /// Reads up to `len` characters into `buf[offset..offset + len]`.
    ///
    /// Returns `Some(n)` with the number of characters stored, `Some(0)` when
    /// `len` is zero, and `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Implementations return [`StreamError::OutOfBounds`] when the window
    /// does not fit in `buf` (see [`check_window`]).
    fn read_into(
        &mut self,
        buf: &mut [char],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, StreamError>;

    /// Reads into the remaining window of `dst` and advances its position.
    ///
    /// # Errors
    ///
    /// Whatever [`read_into`](CharStream::read_into) reports.
    fn read_buffer(&mut self, dst: &mut CharBuffer) -> Result<Option<usize>, StreamError> {
        let window = dst.window_mut();
        let len = window.len();
        let read = self.read_into(window, 0, len)?;
        if let Some(n) = read {
            dst.advance(n);
        }
        Ok(read)
    }

    /// Skips up to `n` characters, returning how many were skipped.
    ///
    /// # Errors
    ///
    /// Whatever [`read_into`](CharStream::read_into) reports.
    fn skip(&mut self, n: u64) -> Result<u64, StreamError> {
        let mut scratch = ['\0'; SKIP_CHUNK];
        let mut skipped = 0u64;
        while skipped < n {
            let want = usize::try_from(n - skipped).map_or(SKIP_CHUNK, |r| r.min(SKIP_CHUNK));
            match self.read_into(&mut scratch, 0, want)? {
                Some(0) | None => break,
                Some(got) => skipped += got as u64,
            }
        }
        Ok(skipped)
    }

    /// Whether the next read is guaranteed not to block.
    ///
    /// # Errors
    ///
    /// Implementation-defined, e.g. [`StreamError::Closed`].
    fn ready(&mut self) -> Result<bool, StreamError> {
        Ok(false)
    }

    /// Whether [`mark`](CharStream::mark) and [`reset`](CharStream::reset)
    /// are supported.
    fn mark_supported(&self) -> bool {
        false
    }

    /// Records the current position so that [`reset`](CharStream::reset) can
    /// return to it. The mark stays valid for at least `read_ahead_limit`
    /// further characters.
    ///
    /// # Errors
    ///
    /// [`StreamError::MarkUnsupported`] unless overridden.
    fn mark(&mut self, read_ahead_limit: usize) -> Result<(), StreamError> {
        let _ = read_ahead_limit;
        Err(StreamError::MarkUnsupported)
    }

    /// Returns to the most recent mark.
    ///
    /// # Errors
    ///
    /// [`StreamError::ResetUnsupported`] unless overridden.
    fn reset(&mut self) -> Result<(), StreamError> {
        Err(StreamError::ResetUnsupported)
    }

    /// Closes the stream. Later operations may fail with
    /// [`StreamError::Closed`].
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn close(&mut self) -> Result<(), StreamError> {
        Ok(())
    }
}

/// Validates a bulk-read window against a buffer of `capacity` characters.
///
/// # Errors
///
/// [`StreamError::OutOfBounds`] when `offset + len` exceeds `capacity` or
/// overflows.
pub fn check_window(capacity: usize, offset: usize, len: usize) -> Result<(), StreamError> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(StreamError::OutOfBounds {
            offset,
            len,
            capacity,
        }),
    }
}

macro_rules! forward_char_stream {
    () => {
        fn read_char(&mut self) -> Result<Option<char>, StreamError> {
            (**self).read_char()
        }

        fn read_into(
            &mut self,
            buf: &mut [char],
            offset: usize,
            len: usize,
        ) -> Result<Option<usize>, StreamError> {
            (**self).read_into(buf, offset, len)
        }

        fn read_buffer(&mut self, dst: &mut CharBuffer) -> Result<Option<usize>, StreamError> {
            (**self).read_buffer(dst)
        }

        fn skip(&mut self, n: u64) -> Result<u64, StreamError> {
            (**self).skip(n)
        }

        fn ready(&mut self) -> Result<bool, StreamError> {
            (**self).ready()
        }

        fn mark_supported(&self) -> bool {
            (**self).mark_supported()
        }

        fn mark(&mut self, read_ahead_limit: usize) -> Result<(), StreamError> {
            (**self).mark(read_ahead_limit)
        }

        fn reset(&mut self) -> Result<(), StreamError> {
            (**self).reset()
        }

        fn close(&mut self) -> Result<(), StreamError> {
            (**self).close()
        }
    };
}

impl<S: CharStream + ?Sized> CharStream for &mut S {
    forward_char_stream!();
}

impl<S: CharStream + ?Sized> CharStream for Box<S> {
    forward_char_stream!();
}
