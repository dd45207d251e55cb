use alloc::boxed::Box;

use thiserror::Error;

/// Errors raised by [`CharStream`](crate::CharStream) implementations.
///
/// Reaching the end of a stream is not an error; reads report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StreamError {
    /// The stream was closed and can no longer be used.
    #[error("Stream closed")]
    Closed,
    /// The stream does not support `mark`.
    #[error("mark() not supported")]
    MarkUnsupported,
    /// The stream does not support `reset`.
    #[error("reset() not supported")]
    ResetUnsupported,
    /// A bulk read window does not fit in the destination buffer.
    #[error("window {offset}+{len} out of bounds for buffer of {capacity}")]
    OutOfBounds {
        /// Start of the requested window.
        offset: usize,
        /// Length of the requested window.
        len: usize,
        /// Length of the destination buffer.
        capacity: usize,
    },
    /// The underlying byte source failed.
    #[error("i/o error: {0}")]
    Io(#[source] Box<dyn core::error::Error + Send + Sync>),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Box::new(err))
    }
}

impl StreamError {
    /// Whether this error reports use of a closed stream.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
