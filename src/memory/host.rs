//! Element access for host-memory views
//!
//! The native accessors (`at`, `front`, `back` and their `_mut` forms)
//! return live references with no bounds check, matching raw-array cost.
//! Out-of-range positions are undefined behaviour, which is why they are
//! `unsafe`. Checked alternatives (`get`, `first`, `last`) are provided
//! alongside and never replace them. Indexing with `[]` is bounds-checked
//! and panics out of range, as slice indexing does; it is not the raw
//! array subscript, which is `at`.
//!
//! These accessors are for host-executing code only.

use super::index::IndexType;
use super::pointer::TaggedPointer;
use crate::runtime::Host;

/// View over host memory
pub type HostPointer<T, I = u32> = TaggedPointer<Host, T, I>;

impl<T, I: IndexType> TaggedPointer<Host, T, I> {
    /// Wrap a host slice
    ///
    /// Fails if the slice length does not fit `I`.
    ///
    /// # Safety
    ///
    /// The view does not borrow `slice`: the caller must keep the slice alive
    /// and unmoved for as long as the view or any copy of it is used, and
    /// must not touch it through `slice` while the view is in use.
    #[cfg(not(target_arch = "nvptx64"))]
    pub unsafe fn from_slice(slice: &mut [T]) -> crate::error::Result<Self> {
        let len = I::from_usize(slice.len()).ok_or(crate::error::Error::LengthOverflow {
            len: slice.len(),
            index_type: I::NAME,
        })?;
        // SAFETY: a slice is valid for its length; lifetime is on the caller.
        Ok(unsafe { Self::from_raw_parts(slice.as_mut_ptr(), len) })
    }

    reference_accessors!(Host);

    /// First element, or `None` if empty
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last element, or `None` if empty
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The viewed elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.storage.is_null() {
            return &[];
        }
        // SAFETY: construction guarantees validity for `len` elements.
        unsafe { core::slice::from_raw_parts(self.storage, self.len()) }
    }

    /// The viewed elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.storage.is_null() {
            return &mut [];
        }
        // SAFETY: construction guarantees validity for `len` elements.
        unsafe { core::slice::from_raw_parts_mut(self.storage, self.len()) }
    }

    /// Iterator over the elements
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the elements
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl_checked_index!([T, I: IndexType] TaggedPointer<Host, T, I>);

impl<'a, T, I: IndexType> IntoIterator for &'a TaggedPointer<Host, T, I> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a mut TaggedPointer<Host, T, I> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
