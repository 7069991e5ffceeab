//! Error type shared by every container in the crate.
//!
//! All fallible operations return [`Result`]. The containers only check
//! preconditions; nothing is retried or recovered internally.

/// Failure returned by container and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The container holds no elements (`pop_first`, `pop_last`, `erase`).
    #[error("container is empty")]
    EmptyContainer,
    /// A cursor or position was dereferenced at a non-element position,
    /// stepped past its valid range, or does not belong to the container.
    #[error("iterator out of range")]
    InvalidIterator,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns `true` for [`Error::EmptyContainer`].
    #[inline]
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Error::EmptyContainer)
    }

    /// Returns `true` for [`Error::InvalidIterator`].
    #[inline]
    pub fn is_invalid_iterator(&self) -> bool {
        matches!(self, Error::InvalidIterator)
    }

    /// Logs the rejected `operation` and returns `Err(self)`.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn raise<T>(self, operation: &'static str) -> Result<T> {
        trace_event!(debug, operation, error = %self, "container operation rejected");
        Err(self)
    }
}
