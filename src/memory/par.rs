//! Rayon interop for host views
//!
//! Parallel iteration is an adaptation of the slice a host view already
//! exposes; no state is added. This lets rayon's parallel algorithms run
//! over a view without naming the view's own cursor type.

use super::index::IndexType;
use super::pointer::TaggedPointer;
use crate::runtime::Host;
use rayon::prelude::*;

impl<T: Sync, I: IndexType> TaggedPointer<Host, T, I> {
    /// Parallel iterator over the elements
    #[inline]
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, T> {
        self.as_slice().par_iter()
    }
}

impl<T: Send, I: IndexType> TaggedPointer<Host, T, I> {
    /// Parallel mutable iterator over the elements
    #[inline]
    pub fn par_iter_mut(&mut self) -> rayon::slice::IterMut<'_, T> {
        self.as_mut_slice().par_iter_mut()
    }
}

impl<'a, T: Sync + 'a, I: IndexType> IntoParallelIterator for &'a TaggedPointer<Host, T, I> {
    type Item = &'a T;
    type Iter = rayon::slice::Iter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.par_iter()
    }
}

impl<'a, T: Send + 'a, I: IndexType> IntoParallelIterator for &'a mut TaggedPointer<Host, T, I> {
    type Item = &'a mut T;
    type Iter = rayon::slice::IterMut<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.par_iter_mut()
    }
}
