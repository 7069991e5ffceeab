//! Container identity.
//!
//! Cursors compare container identity by address, but a `Position` outlives
//! the borrow it came from and the container may move in the meantime. Every
//! container therefore carries an `OwnerId` that stays with it across moves and
//! is never shared with a clone.

use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// Identity of one container instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OwnerId(u64);

impl OwnerId {
    /// Allocates an identity no other live or future container shares.
    #[inline]
    pub(crate) fn fresh() -> Self {
        Self(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }
}
