/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites should only pass expressions
/// that are cheap and side-effect free.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}

/// Creates a [`Vector`](crate::Vector) from a literal list of elements.
///
/// # Example
///
/// ```rust
/// use seqkit::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Vector::from([$($item),+])
    };
}

/// Creates a [`LinkedList`](crate::LinkedList) from a literal list of elements.
///
/// # Example
///
/// ```rust
/// use seqkit::linked_list;
///
/// let list = linked_list!["a", "b"];
/// assert_eq!(list.front(), Some(&"a"));
/// ```
#[macro_export]
macro_rules! linked_list {
    () => {
        $crate::LinkedList::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::LinkedList::from([$($item),+])
    };
}
