//! Character-stream decorators with a hard cap on how many characters can be
//! read through them.
//!
//! The central type is [`BoundedReader`], which wraps any [`CharStream`] and
//! refuses to yield more than a configured number of characters, regardless
//! of how much input the wrapped stream still has. Budget consumed after a
//! [`CharStream::mark`] is refunded on [`CharStream::reset`].
//!
//! ```rust
//! use charbound::{BoundedReader, CharStream, StrStream};
//!
//! let mut reader = BoundedReader::new(StrStream::new("hello"), 3);
//! let mut out = String::new();
//! while let Some(c) = reader.read_char().unwrap() {
//!     out.push(c);
//! }
//! assert_eq!(out, "hel");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod bounded;
mod char_buffer;
mod error;
#[cfg(feature = "std")]
mod io_stream;
mod null_stream;
mod options;
mod str_stream;
mod stream;


pub use bounded::BoundedReader;
pub use char_buffer::CharBuffer;
pub use error::StreamError;
#[cfg(feature = "std")]
pub use io_stream::IoStream;
pub use null_stream::NullStream;
pub use options::{BoundedReaderOptions, SkipPolicy};
pub use str_stream::StrStream;
pub use stream::{CharStream, check_window};
