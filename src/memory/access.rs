//! Reference accessors shared by every view whose memory the calling code
//! can address directly
//!
//! Host views get them on every build; accelerator views get them only in
//! device code. Both expand the same bodies, so the host test suite covers
//! the device accessor set as well.

/// Unchecked reference accessors, checked `get`/`get_mut` and `atomic_add`
///
/// Expands to associated functions; invoke inside an `impl` block for a
/// `TaggedPointer` whose element type is `T` and index type `I`. `$system`
/// is the backend whose atomics `atomic_add` dispatches to.
macro_rules! reference_accessors {
    ($system:ty) => {
        /// Reference to the element at `pos`, unchecked
        ///
        /// # Safety
        ///
        /// `pos < size()`, and the element must not be written while the
        /// reference is live.
        #[inline]
        pub unsafe fn at(&self, pos: I) -> &T {
            // SAFETY: upheld by the caller.
            unsafe { &*self.storage.add(pos.as_usize()) }
        }

        /// Mutable reference to the element at `pos`, unchecked
        ///
        /// # Safety
        ///
        /// `pos < size()`, and no other reference to the element may be live.
        #[inline]
        pub unsafe fn at_mut(&mut self, pos: I) -> &mut T {
            // SAFETY: upheld by the caller.
            unsafe { &mut *self.storage.add(pos.as_usize()) }
        }

        /// First element, unchecked; equivalent to `at(0)`
        ///
        /// # Safety
        ///
        /// The view must not be empty.
        #[inline]
        pub unsafe fn front(&self) -> &T {
            // SAFETY: upheld by the caller.
            unsafe { &*self.storage }
        }

        /// Mutable first element, unchecked
        ///
        /// # Safety
        ///
        /// The view must not be empty, and no other reference to the element
        /// may be live.
        #[inline]
        pub unsafe fn front_mut(&mut self) -> &mut T {
            // SAFETY: upheld by the caller.
            unsafe { &mut *self.storage }
        }

        /// Last element, unchecked; equivalent to `at(size() - 1)`
        ///
        /// # Safety
        ///
        /// The view must not be empty.
        #[inline]
        pub unsafe fn back(&self) -> &T {
            // SAFETY: upheld by the caller.
            unsafe { &*self.storage.add(self.len() - 1) }
        }

        /// Mutable last element, unchecked
        ///
        /// # Safety
        ///
        /// The view must not be empty, and no other reference to the element
        /// may be live.
        #[inline]
        pub unsafe fn back_mut(&mut self) -> &mut T {
            // SAFETY: upheld by the caller.
            unsafe { &mut *self.storage.add(self.len() - 1) }
        }

        /// Checked element access
        #[inline]
        pub fn get(&self, pos: I) -> Option<&T> {
            if pos.as_usize() < self.len() {
                // SAFETY: bounds checked above.
                Some(unsafe { self.at(pos) })
            } else {
                None
            }
        }

        /// Checked mutable element access
        #[inline]
        pub fn get_mut(&mut self, pos: I) -> Option<&mut T> {
            if pos.as_usize() < self.len() {
                // SAFETY: bounds checked above.
                Some(unsafe { self.at_mut(pos) })
            } else {
                None
            }
        }

        /// Atomically add `delta` to the element at `pos`, returning its
        /// previous value
        ///
        /// # Safety
        ///
        /// `pos < size()`, and every concurrent access to that element must
        /// be atomic for the duration of the call.
        #[inline]
        pub unsafe fn atomic_add(&self, pos: I, delta: T) -> T
        where
            T: $crate::atomics::AtomicAdd<$system>,
        {
            // SAFETY: upheld by the caller.
            unsafe {
                $crate::atomics::Atomics::<$system>::add(self.storage.add(pos.as_usize()), delta)
            }
        }
    };
}

/// `Index`/`IndexMut` for a directly addressable view
///
/// Takes the impl generics in brackets followed by the view type, e.g.
/// `impl_checked_index!([T, I: IndexType] TaggedPointer<Host, T, I>)`.
macro_rules! impl_checked_index {
    ([$($generics:tt)*] $view:ty) => {
        impl<$($generics)*> ::core::ops::Index<I> for $view {
            type Output = T;

            /// Bounds-checked: panics when `pos >= size()`, like slice
            /// indexing. Unchecked access is the `unsafe` `at`.
            #[inline]
            fn index(&self, pos: I) -> &T {
                assert!(
                    pos.as_usize() < self.len(),
                    "index {} out of range for view of size {}",
                    pos.as_usize(),
                    self.len()
                );
                // SAFETY: bounds checked above.
                unsafe { self.at(pos) }
            }
        }

        impl<$($generics)*> ::core::ops::IndexMut<I> for $view {
            /// Bounds-checked like [`Index::index`](::core::ops::Index::index).
            #[inline]
            fn index_mut(&mut self, pos: I) -> &mut T {
                assert!(
                    pos.as_usize() < self.len(),
                    "index {} out of range for view of size {}",
                    pos.as_usize(),
                    self.len()
                );
                // SAFETY: bounds checked above.
                unsafe { self.at_mut(pos) }
            }
        }
    };
}
