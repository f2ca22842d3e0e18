use thiserror::Error;

/// All errors returned by `listxt-core`.
///
/// Every variant describes a broken caller contract rather than a transient
/// fault, so nothing in this crate retries or recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An element lacks a capability the operation needs (numeric conversion
    /// or natural ordering).
    #[error("type mismatch in `{operation}` at element {index}: {reason}")]
    TypeMismatch {
        operation: &'static str,
        index: usize,
        reason: &'static str,
    },

    /// Two vector operands of a pairwise operation have different lengths.
    #[error("size mismatch in `{operation}`: expected {expected} elements, got {got}")]
    SizeMismatch {
        operation: &'static str,
        expected: usize,
        got: usize,
    },

    /// The operation is undefined on an empty collection.
    #[error("`{operation}` is undefined on an empty collection")]
    EmptyCollection { operation: &'static str },

    /// A positional insert targeted an index past the end of the container.
    #[error("index {index} out of bounds for container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Convenience alias used throughout `listxt-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
