//! Positional cursors over tagged memory

use crate::runtime::{Host, System};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

/// Raw positional cursor into memory owned by system `S`
///
/// A cursor is an address plus a backend tag. It can be compared, moved and
/// measured anywhere, but dereferencing is only offered where the calling
/// code can address `S` memory. Movement is never bounds-checked; the
/// `[begin, end)` pair returned by a view is the only range information.
pub struct Cursor<S: System, T> {
    ptr: *mut T,
    _system: PhantomData<S>,
}

impl<S: System, T> Cursor<S, T> {
    #[inline]
    pub(crate) const fn new(ptr: *mut T) -> Self {
        Self {
            ptr,
            _system: PhantomData,
        }
    }

    /// Raw address the cursor points at
    #[inline]
    pub fn as_ptr(self) -> *mut T {
        self.ptr
    }

    /// Address as a device pointer, as taken by runtime transfers
    #[inline]
    pub fn device_ptr(self) -> u64 {
        self.ptr as usize as u64
    }

    /// Cursor `n` elements further on
    #[inline]
    #[must_use]
    pub fn add(self, n: usize) -> Self {
        Self::new(self.ptr.wrapping_add(n))
    }

    /// Move the cursor one element forward
    #[inline]
    pub fn advance(&mut self) {
        self.ptr = self.ptr.wrapping_add(1);
    }

    /// Signed element distance from `origin` to `self`
    ///
    /// Zero-sized elements have no distinct positions; the distance is 0.
    #[inline]
    pub fn distance_from(self, origin: Self) -> isize {
        let size = core::mem::size_of::<T>();
        if size == 0 {
            return 0;
        }
        (self.ptr as isize).wrapping_sub(origin.ptr as isize) / size as isize
    }
}

impl<T> Cursor<Host, T> {
    /// Reference to the element under the cursor
    ///
    /// # Safety
    ///
    /// The cursor must lie in `[begin, end)` of a live view and the element
    /// must not be mutated while the reference exists.
    #[inline]
    pub unsafe fn get<'a>(self) -> &'a T {
        // SAFETY: upheld by the caller.
        unsafe { &*self.ptr }
    }

    /// Mutable reference to the element under the cursor
    ///
    /// # Safety
    ///
    /// As for [`Cursor::get`], and no other reference to the element may exist.
    #[inline]
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        // SAFETY: upheld by the caller.
        unsafe { &mut *self.ptr }
    }
}

impl<S: System, T> Clone for Cursor<S, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: System, T> Copy for Cursor<S, T> {}

impl<S: System, T> PartialEq for Cursor<S, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.ptr, other.ptr)
    }
}

impl<S: System, T> Eq for Cursor<S, T> {}

impl<S: System, T> PartialOrd for Cursor<S, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: System, T> Ord for Cursor<S, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.ptr as usize).cmp(&(other.ptr as usize))
    }
}

impl<S: System, T> fmt::Debug for Cursor<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor<{}>({:p})", S::NAME, self.ptr)
    }
}

// SAFETY: a cursor is an address; access goes through unsafe methods whose
// callers uphold the aliasing rules.
unsafe impl<S: System, T: Send + Sync> Send for Cursor<S, T> {}
// SAFETY: as above.
unsafe impl<S: System, T: Send + Sync> Sync for Cursor<S, T> {}
