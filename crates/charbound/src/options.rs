/// How [`BoundedReader::skip`](crate::BoundedReader) interacts with the
/// character budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SkipPolicy {
    /// Skipped characters count against the budget, and a skip never moves
    /// past it.
    #[default]
    Charged,
    /// Skips go straight to the wrapped stream and leave the budget alone.
    Passthrough,
}

/// Configuration options for [`BoundedReader`](crate::BoundedReader).
///
/// # Examples
///
/// ```rust
/// use charbound::{BoundedReader, BoundedReaderOptions, SkipPolicy, StrStream};
///
/// let options = BoundedReaderOptions {
///     skip_policy: SkipPolicy::Passthrough,
/// };
/// let reader = BoundedReader::with_options(StrStream::new("abc"), 2, options);
/// assert_eq!(reader.options().skip_policy, SkipPolicy::Passthrough);
/// ```
///
/// # Default
///
/// Skips are charged against the budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BoundedReaderOptions {
    /// Whether skipped characters are charged against the budget.
    ///
    /// # Default
    ///
    /// [`SkipPolicy::Charged`]
    pub skip_policy: SkipPolicy,
}
