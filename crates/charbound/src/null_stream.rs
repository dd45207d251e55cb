use crate::{CharStream, StreamError, check_window};

/// A [`CharStream`] with no content.
///
/// Every read reports end of stream, skips skip nothing, and mark/reset are
/// accepted as no-ops. The type holds no state, so construct one wherever it
/// is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullStream;

impl NullStream {
    /// Creates an empty stream.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CharStream for NullStream {
    fn read_char(&mut self) -> Result<Option<char>, StreamError> {
        Ok(None)
    }

    fn read_into(
        &mut self,
        buf: &mut [char],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, StreamError> {
        check_window(buf.len(), offset, len)?;
        Ok((len == 0).then_some(0))
    }

    fn skip(&mut self, _n: u64) -> Result<u64, StreamError> {
        Ok(0)
    }

    fn ready(&mut self) -> Result<bool, StreamError> {
        Ok(true)
    }

    fn mark_supported(&self) -> bool {
        true
    }

    fn mark(&mut self, _read_ahead_limit: usize) -> Result<(), StreamError> {
        Ok(())
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        Ok(())
    }
}
