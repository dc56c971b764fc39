use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::core::GrowableSequence;

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panicking counterpart of `get`.
impl<T> Index<usize> for GrowableSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(_) => panic!(
                "Index {} out of bounds for sequence of length {}",
                index,
                self.len()
            ),
        }
    }
}

/// Panicking counterpart of `get_mut`.
impl<T> IndexMut<usize> for GrowableSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len();
        match self.get_mut(index) {
            Ok(item) => item,
            Err(_) => panic!(
                "Index {} out of bounds for sequence of length {}",
                index, length
            ),
        }
    }
}

/// Equality looks at live elements only; capacity and config are ignored.
impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items().eq(other.items())
    }
}

impl<T: Eq> Eq for GrowableSequence<T> {}

impl<T, const N: usize> From<[T; N]> for GrowableSequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T> From<Vec<T>> for GrowableSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> FromIterator<T> for GrowableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for GrowableSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}
