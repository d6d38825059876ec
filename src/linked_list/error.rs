use thiserror::Error;

/// Error returned by indexed write operations when the index is past the end
/// of the list.
///
/// Carries the length of the list at the time of the failed access, so the
/// caller can recompute the valid range. Read operations never produce this
/// error; an out-of-range read is an ordinary `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range, the available range is [0, {}]", .len.saturating_sub(1))]
pub struct IndexOutOfRangeError {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements in the list when the access failed.
    pub len: usize,
}
