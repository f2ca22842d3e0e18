//! The ordered-container abstraction every operation in this crate runs on.
//!
//! [`OrderedContainer`] is the small capability set the functional and
//! numeric operations need from a collection: positional read, append,
//! positional insert, size and forward iteration. The operations never care
//! which backend they run on; `Vec`, `VecDeque` and `LinkedList` are provided.

mod backends;

use crate::error::Result;

/// A mutable, index-addressable sequence whose iteration order is its
/// insertion order.
///
/// Indices are always the contiguous range `0..len()`.
///
/// # Rebinding
///
/// [`Rebind<U>`](OrderedContainer::Rebind) names the same backend holding
/// `U` instead of `Self::Item`, so `map` over a `LinkedList<i32>` produces a
/// `LinkedList<R>` and `map` over a `Vec<i32>` produces a `Vec<R>`.
pub trait OrderedContainer: Sized {
    /// The element type.
    type Item;

    /// The same kind of container holding `U`.
    type Rebind<U>: OrderedContainer<Item = U>;

    /// An empty container. `capacity` is a hint and may be ignored.
    fn with_capacity(capacity: usize) -> Self;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the container has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, or `None` if `index >= len()`.
    fn get_at(&self, index: usize) -> Option<&Self::Item>;

    /// Append `value` at the end.
    fn push(&mut self, value: Self::Item);

    /// Insert `value` so that it ends up at `index`, shifting later elements.
    ///
    /// `index == len()` appends. Any larger index is rejected with
    /// [`CoreError::IndexOutOfBounds`](crate::CoreError::IndexOutOfBounds)
    /// and leaves the container untouched.
    fn insert_at(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Iterate over the elements in index order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item> + '_;

    // ------------------------------------------------------------------
    // Construction helpers
    // ------------------------------------------------------------------

    /// Build a container by appending every element of `elements` in order.
    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let elements = elements.into_iter();
        let mut out = Self::with_capacity(elements.size_hint().0);
        for element in elements {
            out.push(element);
        }
        out
    }

    /// A container holding `n` copies of `element`.
    ///
    /// ```
    /// # use listxt_core::OrderedContainer;
    /// let v: Vec<&str> = OrderedContainer::filled("x", 3);
    /// assert_eq!(v, vec!["x", "x", "x"]);
    /// ```
    fn filled(element: Self::Item, n: usize) -> Self
    where
        Self::Item: Clone,
    {
        Self::from_elements(core::iter::repeat_n(element, n))
    }
}
