//! Doubly linked storage with a permanent end sentinel.
//!
//! [`LinkedList`] keeps its nodes in an arena of slots. Cursors name nodes by
//! slot and generation, so erased nodes are detected rather than dereferenced.

pub mod cursor;
pub mod iter;
pub mod linked_list;

pub use cursor::{ConstCursor, CursorMut, Position};
pub use iter::{IntoIter, Iter, IterMut};
pub use linked_list::LinkedList;
