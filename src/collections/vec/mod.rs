//! Contiguous, growable storage.
//!
//! [`Vector`] owns a single buffer whose capacity doubles when full. Its
//! cursors are plain indices checked against the current length.

mod buffer;
pub mod cursor;
pub mod iter;
pub mod vector;

pub use cursor::{ConstCursor, CursorMut, Position};
pub use iter::{IntoIter, Iter, IterMut};
pub use vector::{Vector, GROWTH_FACTOR, MIN_CAPACITY};
