//! A fixed-capacity character buffer with a read/write cursor.
//!
//! [`CharBuffer`] follows the position/limit convention of NIO-style buffers:
//! reads fill the window `position..limit` and advance `position`. Calling
//! [`CharBuffer::flip`] after filling makes the filled region the readable
//! window.

use alloc::{string::String, vec, vec::Vec};

/// A fixed-capacity buffer of `char`s with a position and a limit.
///
/// Invariant: `position <= limit <= capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharBuffer {
    data: Vec<char>,
    position: usize,
    limit: usize,
}

impl CharBuffer {
    /// Creates an empty buffer that can hold `capacity` characters.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec!['\0'; capacity],
            position: 0,
            limit: capacity,
        }
    }

    /// Total number of characters the buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of characters between the position and the limit.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Whether any characters remain between the position and the limit.
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Sets the limit, clamped to the capacity. The position is pulled back
    /// to the new limit when it would otherwise exceed it.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.min(self.capacity());
        self.position = self.position.min(self.limit);
    }

    /// Makes the filled region `0..position` the window.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Resets position and limit so the whole capacity is writable again.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }

    /// The characters before the position.
    #[must_use]
    pub fn as_filled(&self) -> &[char] {
        &self.data[..self.position]
    }

    /// Collects the characters before the position into a `String`.
    #[must_use]
    pub fn filled_string(&self) -> String {
        self.as_filled().iter().collect()
    }

    /// The writable window `position..limit`.
    pub(crate) fn window_mut(&mut self) -> &mut [char] {
        &mut self.data[self.position..self.limit]
    }

    /// Moves the position forward by `n`, clamped to the limit.
    pub(crate) fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.limit);
    }
}
