//! [`OrderedContainer`] for the standard library's sequence collections.
//!
//! Method bodies call the inherent methods through explicit paths: inside
//! these impls a plain `self.len()` would resolve back to the trait method.

use std::collections::{LinkedList, VecDeque};

use crate::error::{CoreError, Result};

use super::OrderedContainer;

// ======================================================================
// Array-backed
// ======================================================================

impl<T> OrderedContainer for Vec<T> {
    type Item = T;
    type Rebind<U> = Vec<U>;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let len = Vec::len(self);
        if index > len {
            return Err(CoreError::IndexOutOfBounds { index, len });
        }
        Vec::insert(self, index, value);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.as_slice().iter()
    }
}

impl<T> OrderedContainer for VecDeque<T> {
    type Item = T;
    type Rebind<U> = VecDeque<U>;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get_at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let len = VecDeque::len(self);
        if index > len {
            return Err(CoreError::IndexOutOfBounds { index, len });
        }
        VecDeque::insert(self, index, value);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        VecDeque::iter(self)
    }
}

// ======================================================================
// Node-linked
// ======================================================================

impl<T> OrderedContainer for LinkedList<T> {
    type Item = T;
    type Rebind<U> = LinkedList<U>;

    #[inline]
    fn with_capacity(_capacity: usize) -> Self {
        LinkedList::new()
    }

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        LinkedList::iter(self).nth(index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let len = LinkedList::len(self);
        if index > len {
            return Err(CoreError::IndexOutOfBounds { index, len });
        }
        let mut tail = LinkedList::split_off(self, index);
        LinkedList::push_back(self, value);
        LinkedList::append(self, &mut tail);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        LinkedList::iter(self)
    }
}
