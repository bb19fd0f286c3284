use thiserror::Error;

/// Errors reported by [`List`](crate::List) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index was outside the range the operation accepts.
    #[error("index {index} out of bounds for list of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// An element of the source list could not be converted into the
    /// destination element type. Neither list was modified.
    #[error("cannot merge `{from}` list into `{into}` list: element {position} does not convert")]
    IncompatibleMerge {
        from: &'static str,
        into: &'static str,
        position: usize,
    },
}

impl ListError {
    pub(crate) const fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }
}

pub type Result<T> = core::result::Result<T, ListError>;
